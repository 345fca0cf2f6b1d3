mod requests;

pub use requests::{LogInForm, NewPostForm};
