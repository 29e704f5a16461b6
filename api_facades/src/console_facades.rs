//! Console Facades
//!
//! C-compatible entry points for the managed runtime's console layer. Every
//! failure is reported through the return status and the `errno_out`
//! parameter; nothing unwinds across this boundary.
//! Based on WindowSize.c

use entities_console_common::{StandardStream, WinSize};

#[cfg(unix)]
use nix::errno::Errno;

/// Raw `ENOTSUP` for builds without terminal ioctls
#[cfg(not(unix))]
const ENOTSUP_RAW: i32 = 95;

/// Raw `EINVAL` for builds without terminal ioctls
#[cfg(not(unix))]
const EINVAL_RAW: i32 = 22;

#[cfg(unix)]
const fn invalid_argument() -> i32 {
    Errno::EINVAL as i32
}

#[cfg(not(unix))]
const fn invalid_argument() -> i32 {
    EINVAL_RAW
}

/// Resolve the platform descriptor number for a standard stream
///
/// # Arguments
///
/// * `standard_file` - Stream selector: 0 = input, 1 = output, 2 = error
/// * `errno_out` - Receives `0` on success, `EINVAL` for any other selector
///
/// # Returns
///
/// The descriptor number, or `-1` when the selector is not one of the three
/// defined streams. No system call is issued either way.
///
/// # Safety
///
/// `errno_out` must be a valid, writable pointer; it is written on every
/// call.
#[no_mangle]
pub unsafe extern "C" fn console_native_get_standard_fileno(
    standard_file: i32,
    errno_out: *mut i32,
) -> i32 {
    match StandardStream::from_raw(standard_file) {
        Some(stream) => {
            *errno_out = 0;
            adapters_console_unix::standard_fileno(stream)
        }
        None => {
            *errno_out = invalid_argument();
            -1
        }
    }
}

/// Query the terminal window size of `console_fd`
///
/// The caller owns the `window_size` buffer and inspects it regardless of
/// the return code, so it is never left undefined: on any failure all four
/// fields are zeroed.
///
/// # Arguments
///
/// * `console_fd` - Open descriptor, expected to refer to a terminal
/// * `window_size` - Receives the reported dimensions, or all zeroes on
///   failure
/// * `errno_out` - Receives `0` on success, the platform error code on
///   failure (e.g. `ENOTTY` when `console_fd` is not a terminal)
///
/// # Returns
///
/// Returns `0` on success, `-1` on failure.
///
/// # Safety
///
/// `window_size` and `errno_out` must be valid, writable pointers; both are
/// written on every call.
#[cfg(unix)]
#[no_mangle]
pub unsafe extern "C" fn console_native_get_window_size(
    console_fd: i32,
    window_size: *mut WinSize,
    errno_out: *mut i32,
) -> i32 {
    match adapters_console_unix::get_window_size(console_fd) {
        Ok(size) => {
            *window_size = size;
            *errno_out = 0;
            0
        }
        Err(err) => {
            *window_size = WinSize::zeroed();
            *errno_out = err as i32;
            -1
        }
    }
}

/// Query the terminal window size (unsupported on this platform)
///
/// Always fails with `ENOTSUP` and zeroes the output buffer.
///
/// # Safety
///
/// `window_size` and `errno_out` must be valid, writable pointers.
#[cfg(not(unix))]
#[no_mangle]
pub unsafe extern "C" fn console_native_get_window_size(
    _console_fd: i32,
    window_size: *mut WinSize,
    errno_out: *mut i32,
) -> i32 {
    *window_size = WinSize::zeroed();
    *errno_out = ENOTSUP_RAW;
    -1
}

/// Set the terminal window size of `console_fd`
///
/// # Arguments
///
/// * `console_fd` - Open descriptor, expected to refer to a terminal
/// * `window_size` - Requested dimensions, fully populated by the caller;
///   read-only in this path and left untouched on failure
/// * `errno_out` - Receives `0` on success, the platform error code on
///   failure
///
/// # Returns
///
/// Returns `0` on success, `-1` on failure.
///
/// # Safety
///
/// `window_size` must be a valid, readable pointer and `errno_out` a valid,
/// writable pointer; `errno_out` is written on every call.
#[cfg(unix)]
#[no_mangle]
pub unsafe extern "C" fn console_native_set_window_size(
    console_fd: i32,
    window_size: *const WinSize,
    errno_out: *mut i32,
) -> i32 {
    match adapters_console_unix::set_window_size(console_fd, *window_size) {
        Ok(()) => {
            *errno_out = 0;
            0
        }
        Err(err) => {
            *errno_out = err as i32;
            -1
        }
    }
}

/// Set the terminal window size (unsupported on this platform)
///
/// Always fails with `ENOTSUP`; the input buffer is not read.
///
/// # Safety
///
/// `errno_out` must be a valid, writable pointer.
#[cfg(not(unix))]
#[no_mangle]
pub unsafe extern "C" fn console_native_set_window_size(
    _console_fd: i32,
    _window_size: *const WinSize,
    errno_out: *mut i32,
) -> i32 {
    *errno_out = ENOTSUP_RAW;
    -1
}
