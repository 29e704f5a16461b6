//! System Console Module (Unix-specific)
//!
//! Standard stream descriptor lookup and terminal window size control for
//! Unix platforms, with unconditional-failure fallbacks where the terminal
//! ioctls do not exist.
//! Based on WindowSize.c

use entities_console_common::{StandardStream, WinSize};

#[cfg(unix)]
use std::os::unix::io::RawFd;

#[cfg(unix)]
use nix::errno::Errno;

/// Resolve the descriptor number of a standard stream
///
/// Purely a constant lookup; no system call is issued and valid stream
/// selectors never fail.
#[cfg(unix)]
pub fn standard_fileno(stream: StandardStream) -> RawFd {
    match stream {
        StandardStream::Input => libc::STDIN_FILENO,
        StandardStream::Output => libc::STDOUT_FILENO,
        StandardStream::Error => libc::STDERR_FILENO,
    }
}

#[cfg(not(unix))]
pub fn standard_fileno(stream: StandardStream) -> i32 {
    stream.as_raw()
}

/// Query the terminal window size
///
/// Issues the TIOCGWINSZ ioctl against `fd`.
///
/// # Arguments
///
/// * `fd` - File descriptor, expected to refer to a terminal device
///
/// # Returns
///
/// Returns the dimensions reported by the terminal driver. The pixel fields
/// pass through as reported; drivers that do not track pixels leave them
/// zero.
///
/// # Errors
///
/// Returns the OS error of the failed ioctl, e.g. `ENOTTY` when `fd` does
/// not refer to a terminal or `EBADF` when it is not open.
#[cfg(unix)]
pub fn get_window_size(fd: RawFd) -> Result<WinSize, Errno> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };
    if result == 0 {
        Ok(WinSize::new(ws.ws_row, ws.ws_col, ws.ws_xpixel, ws.ws_ypixel))
    } else {
        Err(Errno::last())
    }
}

#[cfg(not(unix))]
pub fn get_window_size(_fd: i32) -> Result<WinSize, ()> {
    Err(())
}

/// Set the terminal window size
///
/// Issues the TIOCSWINSZ ioctl against `fd` with the requested dimensions.
/// A single kernel operation; there are no partial effects to undo on
/// failure.
///
/// # Arguments
///
/// * `fd` - File descriptor, expected to refer to a terminal device
/// * `size` - Requested dimensions, fully populated by the caller
///
/// # Errors
///
/// Returns the OS error of the failed ioctl.
#[cfg(unix)]
pub fn set_window_size(fd: RawFd, size: WinSize) -> Result<(), Errno> {
    let ws = libc::winsize {
        ws_row: size.row,
        ws_col: size.col,
        ws_xpixel: size.x_pixel,
        ws_ypixel: size.y_pixel,
    };
    let result = unsafe { libc::ioctl(fd, libc::TIOCSWINSZ, &ws) };
    if result == 0 {
        Ok(())
    } else {
        Err(Errno::last())
    }
}

#[cfg(not(unix))]
pub fn set_window_size(_fd: i32, _size: WinSize) -> Result<(), ()> {
    Err(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_standard_fileno() {
        assert_eq!(standard_fileno(StandardStream::Input), 0);
        assert_eq!(standard_fileno(StandardStream::Output), 1);
        assert_eq!(standard_fileno(StandardStream::Error), 2);
    }

    #[test]
    #[cfg(unix)]
    fn test_get_window_size_on_stdin() {
        // stdin may or may not be a TTY; only assert dimensions when it is one
        if let Ok(size) = get_window_size(libc::STDIN_FILENO) {
            assert!(size.row > 0);
            assert!(size.col > 0);
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_get_window_size_not_a_tty() {
        use std::os::unix::io::AsRawFd;

        let file = tempfile::tempfile().unwrap();
        let err = get_window_size(file.as_raw_fd()).unwrap_err();
        assert_eq!(err, Errno::ENOTTY);
    }

    #[test]
    #[cfg(unix)]
    fn test_get_window_size_bad_descriptor() {
        let err = get_window_size(-1).unwrap_err();
        assert_eq!(err, Errno::EBADF);
    }

    #[test]
    #[cfg(unix)]
    fn test_set_window_size_not_a_tty() {
        use std::os::unix::io::AsRawFd;

        let file = tempfile::tempfile().unwrap();
        let err = set_window_size(file.as_raw_fd(), WinSize::new(24, 80, 0, 0)).unwrap_err();
        assert_eq!(err, Errno::ENOTTY);
    }

    #[test]
    #[cfg(unix)]
    fn test_window_size_roundtrip_on_pty() {
        use std::os::unix::io::AsRawFd;

        let pty = nix::pty::openpty(None, None).unwrap();
        let fd = pty.slave.as_raw_fd();

        let requested = WinSize::new(48, 132, 0, 0);
        set_window_size(fd, requested).unwrap();
        assert_eq!(get_window_size(fd).unwrap(), requested);
    }

    #[test]
    #[cfg(not(unix))]
    fn test_window_size_unsupported() {
        assert!(get_window_size(0).is_err());
        assert!(set_window_size(0, WinSize::new(24, 80, 0, 0)).is_err());
    }
}
