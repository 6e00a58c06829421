//! Leveled assertions.
//!
//! Assertions at the [`MAPF_ASSERT_SIMPLE`] level are always checked; they guard invariants whose
//! violation means the integration with the master problem is broken (e.g. cuts surviving into a
//! freshly duplicated problem). The more expensive levels are only active when the crate is
//! compiled with the `debug-checks` feature.

#[cfg(not(feature = "debug-checks"))]
pub const MAPF_ASSERT_LEVEL_DEFINITION: u8 = MAPF_ASSERT_SIMPLE;
#[cfg(feature = "debug-checks")]
pub const MAPF_ASSERT_LEVEL_DEFINITION: u8 = MAPF_ASSERT_EXTREME;

pub const MAPF_ASSERT_SIMPLE: u8 = 1;
pub const MAPF_ASSERT_MODERATE: u8 = 2;
pub const MAPF_ASSERT_ADVANCED: u8 = 3;
pub const MAPF_ASSERT_EXTREME: u8 = 4;

macro_rules! mapf_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPF_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

macro_rules! mapf_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPF_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

macro_rules! mapf_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPF_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

macro_rules! mapf_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPF_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

macro_rules! mapf_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPF_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPF_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}

pub(crate) use mapf_assert_advanced;
pub(crate) use mapf_assert_eq_simple;
pub(crate) use mapf_assert_extreme;
pub(crate) use mapf_assert_moderate;
pub(crate) use mapf_assert_simple;
