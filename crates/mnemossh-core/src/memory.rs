//! Process hardening for seed handling
//!
//! A crash while a mnemonic or seed sits in memory must not leave a core file
//! behind, so [`disable_core_dumps`] sets `RLIMIT_CORE` to zero. Best effort:
//! containers and some platforms refuse it, which is logged and ignored.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable core dumps for the current process.
///
/// Returns `true` once core dumps are off. Later calls are no-ops that
/// report the earlier outcome as success.
///
/// ```
/// mnemossh_core::memory::disable_core_dumps();
/// ```
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.swap(true, Ordering::SeqCst) {
        return true;
    }

    #[cfg(unix)]
    {
        unix::disable_core_dumps_impl()
    }

    #[cfg(not(unix))]
    {
        warn!("core dump prevention is not supported on this platform");
        false
    }
}

#[cfg(unix)]
mod unix {
    use super::{debug, warn};

    pub fn disable_core_dumps_impl() -> bool {
        let limit = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: setrlimit only reads the struct we pass by reference
        let result = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) };
        if result != 0 {
            warn!(
                "failed to disable core dumps: {}",
                std::io::Error::last_os_error()
            );
            return false;
        }
        debug!("core dumps disabled");
        true
    }
}
