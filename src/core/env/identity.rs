use std::env;
use std::ffi::CStr;

const UNKNOWN_USER: &str = "user";
const UNKNOWN_HOST: &str = "localhost";

/// Name of the invoking user: `$USER`, then the password database.
pub fn current_user() -> String {
    if let Ok(user) = env::var("USER") {
        if !user.is_empty() {
            return user;
        }
    }

    passwd_name().unwrap_or_else(|| UNKNOWN_USER.to_string())
}

fn passwd_name() -> Option<String> {
    // SAFETY: getpwuid returns either null or a pointer into static storage
    // that stays valid until the next passwd lookup; it is copied out here.
    unsafe {
        let entry = libc::getpwuid(libc::getuid());
        if entry.is_null() || (*entry).pw_name.is_null() {
            return None;
        }
        Some(CStr::from_ptr((*entry).pw_name).to_string_lossy().into_owned())
    }
}

pub fn hostname() -> String {
    let mut buf = [0u8; 256];
    // SAFETY: the buffer outlives the call and its length is passed along.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        return UNKNOWN_HOST.to_string();
    }

    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    match String::from_utf8_lossy(&buf[..end]).into_owned() {
        name if name.is_empty() => UNKNOWN_HOST.to_string(),
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_not_empty() {
        assert!(!current_user().is_empty());
        assert!(!hostname().is_empty());
    }
}
