//! Account-database lookups on POSIX systems.
//!
//! Uses the reentrant `getpwuid_r` / `getpwnam_r` interfaces. This is the
//! only module in the crate containing `unsafe` code.

use std::ffi::{CStr, CString, OsString};
use std::os::unix::ffi::OsStringExt;
use std::path::PathBuf;
use std::ptr;

// getpwnam_r may ask for a bigger buffer via ERANGE; stop doubling here.
const MAX_BUF_LEN: usize = 1 << 20;

/// Home directory recorded for the current user id, if any.
pub(crate) fn current_user_home() -> Option<PathBuf> {
    // SAFETY: getuid has no preconditions and cannot fail.
    let uid = unsafe { libc::getuid() };
    lookup(|pwd, buf, buflen, result| {
        // SAFETY: pwd, buf, and result are valid for the duration of the call
        // and buflen matches the buffer's length.
        unsafe { libc::getpwuid_r(uid, pwd, buf, buflen, result) }
    })
}

/// Home directory recorded for the named user, if any.
pub(crate) fn named_user_home(username: &str) -> Option<PathBuf> {
    let name = CString::new(username).ok()?;
    lookup(|pwd, buf, buflen, result| {
        // SAFETY: name outlives the call; the remaining pointers are valid
        // for the duration of the call and buflen matches the buffer.
        unsafe { libc::getpwnam_r(name.as_ptr(), pwd, buf, buflen, result) }
    })
}

fn lookup<F>(call: F) -> Option<PathBuf>
where
    F: Fn(
        *mut libc::passwd,
        *mut libc::c_char,
        libc::size_t,
        *mut *mut libc::passwd,
    ) -> libc::c_int,
{
    let mut buf: Vec<libc::c_char> = vec![0; 1024];
    // SAFETY: passwd is a plain C struct for which zeroed memory is a valid
    // (if meaningless) value; the libc call overwrites it on success.
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = ptr::null_mut();

    loop {
        let rc = call(&mut pwd, buf.as_mut_ptr(), buf.len(), &mut result);
        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            let doubled = buf.len() * 2;
            buf.resize(doubled, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            return None;
        }
        break;
    }

    if pwd.pw_dir.is_null() {
        return None;
    }
    // SAFETY: pw_dir is a non-null NUL-terminated string pointing into buf,
    // which is still alive here.
    let dir = unsafe { CStr::from_ptr(pwd.pw_dir) };
    Some(PathBuf::from(OsString::from_vec(dir.to_bytes().to_vec())))
}
