//! Output of the final plugin line.
pub trait Printer {
    fn print(&self, output: &str);
    fn println(&self, output: &str);
}
