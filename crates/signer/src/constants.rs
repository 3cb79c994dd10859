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

use time::{format_description::FormatItem, macros::format_description};

pub const SIGN_OBS_ALGORITHM: &str = "OBS";

/// Vendor headers included in the string to sign
pub const OBS_HEADER_PREFIX: &str = "x-obs-";

pub const CONTENT_MD5: &str = "content-md5";

pub const HTTP_DATE_FORMAT: &[FormatItem<'_>] =
    format_description!("[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT");
