// SPDX-License-Identifier: MPL-2.0
//! Domain layer: value types with no UI or I/O dependencies.

pub mod gallery;
