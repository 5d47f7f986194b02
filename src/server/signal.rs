use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

// Only async-signal-safe work here: store the flag, nothing else.
extern "C" fn on_sigint(_signum: libc::c_int) {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

/// Registers the SIGINT handler. SA_RESTART stays off: the serve loop relies
/// on EINTR from the blocking accept to observe the flag.
pub fn install() -> std::io::Result<()> {
    let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
    action.sa_sigaction = on_sigint as libc::sighandler_t;
    action.sa_flags = 0;

    let rc = unsafe {
        libc::sigemptyset(&mut action.sa_mask);
        libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut())
    };

    if rc != 0 {
        return Err(std::io::Error::last_os_error());
    }

    Ok(())
}

pub fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}
