// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules in this crate `use crate::errors::*;` to get access to everything
// `error_chain!` creates.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}, width and height must be positive", width, height)
        }
        MalformedMazeText(reason: String) {
            description("malformed maze text")
            display("malformed maze text: {}", reason)
        }
        MazeFileUnavailable(path: String) {
            description("input maze file unavailable")
            display("input maze file unavailable: '{}'", path)
        }
    }
}
