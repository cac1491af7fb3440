//! Z-order bookkeeping for open overlay windows.

/// Default z-index floor.
const BASE_Z_INDEX: i32 = 40;

/// Front-to-back ordering over open window ids. The front-most window
/// is the last element; paint order is the base plus stack position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStack {
    order: Vec<String>,
    base_z_index: i32,
}

impl WindowStack {
    pub fn new() -> Self {
        Self::with_base(BASE_Z_INDEX)
    }

    pub fn with_base(base_z_index: i32) -> Self {
        Self {
            order: Vec::new(),
            base_z_index,
        }
    }

    /// Open a window, or bring it to the front when already open.
    pub fn register(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(pos) = self.order.iter().position(|w| *w == id) {
            self.order.remove(pos);
        }
        self.order.push(id);
    }

    /// Close a window. Unknown ids are a no-op.
    pub fn unregister(&mut self, id: &str) {
        self.order.retain(|w| w != id);
    }

    /// Move a window to the front. Returns `false` without touching
    /// the ordering when the window is already front-most; ids not yet
    /// registered are added at the front.
    pub fn bring_to_front(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.order.last() == Some(&id) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|w| *w == id) {
            self.order.remove(pos);
        }
        self.order.push(id);
        true
    }

    /// Paint order for a window: the base plus its stack position.
    /// Unregistered ids get the base.
    pub fn z_index_of(&self, id: &str) -> i32 {
        match self.order.iter().position(|w| w == id) {
            Some(pos) => self.base_z_index + pos as i32,
            None => self.base_z_index,
        }
    }

    /// Open windows back to front.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn base_z_index(&self) -> i32 {
        self.base_z_index
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new()
    }
}
