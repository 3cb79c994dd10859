// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! OpenStack Keystone integration for stackscrape
//!
//! Issues project-scoped v3 tokens and resolves service endpoints from the
//! catalog that comes with them.
//!
//! # Features
//!
//! - Password authentication by user id or user name and domain
//! - Application credential authentication
//! - Project, domain or unscoped tokens
//! - Endpoint lookup by service type aliases, interface and region
//!
//! # Example
//!
//! ```no_run
//! use stackscrape_keystone::{ClientOptions, KeystoneAuthenticator, KeystoneClient, SessionProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KeystoneClient::new(&ClientOptions::default())?;
//! let provider = KeystoneAuthenticator::from_env(client);
//!
//! let session = provider.authenticate().await?;
//! let compute = session.endpoint(&["compute"])?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use auth::{KeystoneAuthenticator, OptionsSource, SessionProvider};
pub use catalog::{CatalogEntry, Endpoint, EndpointQuery, ServiceCatalog, join_path};
pub use client::{ClientOptions, KeystoneClient};
pub use config::{AuthOptions, BlockStorageVersion};
pub use error::{KeystoneError, Result};
pub use session::{AUTH_TOKEN_HEADER, Session};
