use std::cell::RefCell;

use crate::logger::Logger;

/// Logger that captures everything it is given.
#[derive(Debug, Default)]
pub struct BufferLogger {
    buf: RefCell<String>,
}

impl BufferLogger {
    pub fn contents(&self) -> String {
        self.buf.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buf.borrow().lines().map(str::to_string).collect()
    }
}

impl Logger for BufferLogger {
    fn print(&self, message: &str) {
        let mut buf = self.buf.borrow_mut();
        buf.push_str(message);
        buf.push('\n');
    }

    fn print_error(&self, source: &str, err: &dyn std::error::Error) {
        self.print(&format!("Error in {}: {}", source, err));
    }
}
