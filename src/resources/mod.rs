//! Namespaced sub-APIs, one per endpoint family.
//!
//! Each resource borrows the connection's execution core and returns
//! [`Submission`](crate::executor::Submission) futures; the work runs whether
//! or not the submission is awaited.

pub mod deck;
pub mod expedition;
pub mod house;
pub mod maps;
pub mod oauth;
pub mod release;
pub mod social;
pub mod user;

/// Escapes a caller-supplied value for use as a path segment.
pub(crate) fn enc(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::enc;

    #[test]
    fn path_segments_are_escaped() {
        assert_eq!(enc("plain-id"), "plain-id");
        assert_eq!(enc("has space/slash"), "has%20space%2Fslash");
    }
}
