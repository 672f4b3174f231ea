#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFunction {
    /// The documentation block exactly as written, `/**` and `*/` included.
    pub comment: String,
    pub name: String,
}

impl DocFunction {
    pub fn new(comment: String, name: String) -> Self {
        DocFunction { comment, name }
    }
}
