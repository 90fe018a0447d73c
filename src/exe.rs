use std::path::PathBuf;

use crate::error::{
        Error,
        Result,
    };

#[cfg(target_os = "linux")]
const PLATFORM: &str = "GNU/Linux";
#[cfg(target_os = "macos")]
const PLATFORM: &str = "MacOS";
#[cfg(windows)]
const PLATFORM: &str = "Windows";

#[cfg(target_os = "linux")]
const PATH_EXE: &str = "/proc/self/exe";

/// Every process gets a symlink to its own binary in procfs, read its
/// target and skip any buffer dance
#[cfg(target_os = "linux")]
fn raw_executable_path() -> Result<PathBuf> {
    std::fs::read_link(PATH_EXE).map_err(|e|
        Error::wrap("read the executable symlink", PLATFORM, e))
}

/// Query the dynamic loader with `initial_capacity` bytes of buffer; if the
/// loader reports that was not enough, retry once with exactly the size it
/// asked for. A second failure is fatal, not retried again.
#[cfg(target_os = "macos")]
fn loader_executable_path(initial_capacity: usize) -> Result<PathBuf> {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    let mut buffer: Vec<u8> = vec![0; initial_capacity];
    let mut size = buffer.len() as u32;
    if unsafe {
        libc::_NSGetExecutablePath(buffer.as_mut_ptr().cast(), &mut size)
    } != 0 {
        // size now holds the length the loader actually needs
        buffer = vec![0; size as usize];
        if unsafe {
            libc::_NSGetExecutablePath(buffer.as_mut_ptr().cast(), &mut size)
        } != 0 {
            return Err(Error::ResolutionFailure(format!(
                "Failed to get the executable path on {} after resizing \
                    the buffer to {}", PLATFORM, size)))
        }
    }
    let len = buffer.iter().position(|byte| *byte == 0)
        .unwrap_or(buffer.len());
    buffer.truncate(len);
    Ok(OsString::from_vec(buffer).into())
}

#[cfg(target_os = "macos")]
fn raw_executable_path() -> Result<PathBuf> {
    loader_executable_path(libc::PATH_MAX as usize)
}

#[cfg(windows)]
fn raw_executable_path() -> Result<PathBuf> {
    use std::{ffi::OsString, os::windows::ffi::OsStringExt};
    use windows::Win32::{
            Foundation::HMODULE,
            System::LibraryLoader::GetModuleFileNameW,
        };

    // Sized to the maximum length of an extended \\?\ path up front, so no
    // resize loop is needed; a null module handle selects the running
    // executable itself instead of a loaded library
    let mut buffer = vec![0u16; 32767];
    let size = unsafe {
        GetModuleFileNameW(HMODULE(std::ptr::null_mut()), &mut buffer)
    } as usize;
    if size == 0 {
        return Err(Error::ResolutionFailure(format!(
            "Failed to get the executable path on {}", PLATFORM)))
    }
    Ok(OsString::from_wide(&buffer[..size]).into())
}

/// Get the absolute, canonical path to the current executable, e.g.
/// "/home/hikari/Github/example/build/example".
///
/// The path is recomputed on every call, with all symlinks and relative
/// segments resolved against the filesystem as it stands at call time.
/// This supports GNU/Linux, MacOS, and Windows.
#[cfg(any(target_os = "linux", target_os = "macos", windows))]
pub fn get_executable_path() -> Result<PathBuf> {
    raw_executable_path()?.canonicalize().map_err(|e|
        Error::wrap("canonicalize the path", PLATFORM, e))
}

/// Other platforms are not supported, every call fails
#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
pub fn get_executable_path() -> Result<PathBuf> {
    Err(Error::ResolutionFailure("Unsupported platform".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(any(target_os = "linux", target_os = "macos", windows))]
    #[test]
    fn resolves_to_running_test_binary() {
        let path = get_executable_path().unwrap();
        assert!(path.is_absolute());
        let expected = std::env::current_exe().unwrap()
            .canonicalize().unwrap();
        assert_eq!(path, expected);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn undersized_buffer_is_retried_with_reported_size() {
        let path = loader_executable_path(1).unwrap();
        assert_eq!(path, raw_executable_path().unwrap());
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
    #[test]
    fn unsupported_platform_fails_cleanly() {
        let msg = get_executable_path().unwrap_err().to_string();
        assert!(msg.contains("Unsupported platform"));
    }
}
