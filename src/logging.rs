// Not every macro is used in every module. Squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(::log::warn!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(::log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(::log::trace!($($tt)*)) }
}
