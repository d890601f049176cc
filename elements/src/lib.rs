// Copyright (c) 2025 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

pub mod astro_util;
pub mod axis_map;
pub mod sensor_trait;
pub mod sexagesimal;
pub mod sliding_filter;
