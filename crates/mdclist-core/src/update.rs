//! Post-render class name change detection.

/// Remembers the class name of the previous render.
///
/// `observe` reports a change only when a previous value exists and differs,
/// so the first render never notifies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassNameTracker {
    previous: Option<String>,
}

impl ClassNameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, class_name: &str) -> bool {
        match self.previous.as_deref() {
            Some(previous) if previous == class_name => false,
            Some(_) => {
                self.previous = Some(class_name.to_string());
                true
            }
            None => {
                self.previous = Some(class_name.to_string());
                false
            }
        }
    }
}
