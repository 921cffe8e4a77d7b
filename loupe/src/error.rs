// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use loupe_gesture::InputError;
use loupe_view::DimensionsError;

/// Errors reported by a [`TileEngine`](crate::TileEngine) or
/// [`Viewer`](crate::Viewer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The container or image could not be measured.
    Dimensions(DimensionsError),
    /// An input event was malformed and skipped.
    Input(InputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions(_) => f.write_str("viewer could not be measured"),
            Self::Input(_) => f.write_str("input event skipped"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Dimensions(e) => Some(e),
            Self::Input(e) => Some(e),
        }
    }
}

impl From<DimensionsError> for Error {
    fn from(e: DimensionsError) -> Self {
        Self::Dimensions(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}
