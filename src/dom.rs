use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

pub trait Document {
    fn text_content(&self, id: &str) -> Option<String>;
    // None means the canvas node itself is absent.
    fn container_size(&self, canvas_id: &str) -> Option<ContainerSize>;
    fn set_canvas_size(&mut self, canvas_id: &str, width: u32, height: u32);
    fn replace_with_notice(&mut self, canvas_id: &str, message: &str);
}

#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    texts: HashMap<String, String>,
    containers: HashMap<String, ContainerSize>,
    canvas_sizes: HashMap<String, (u32, u32)>,
    notices: HashMap<String, String>,
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, id: &str, content: &str) -> Self {
        self.texts.insert(id.to_string(), content.to_string());
        self
    }

    pub fn with_canvas(mut self, canvas_id: &str, width: u32, height: u32) -> Self {
        self.containers
            .insert(canvas_id.to_string(), ContainerSize { width, height });
        self
    }

    pub fn canvas_size(&self, canvas_id: &str) -> Option<(u32, u32)> {
        self.canvas_sizes.get(canvas_id).copied()
    }

    pub fn notice(&self, canvas_id: &str) -> Option<&str> {
        self.notices.get(canvas_id).map(String::as_str)
    }
}

impl Document for StaticDocument {
    fn text_content(&self, id: &str) -> Option<String> {
        self.texts.get(id).cloned()
    }

    fn container_size(&self, canvas_id: &str) -> Option<ContainerSize> {
        self.containers.get(canvas_id).copied()
    }

    fn set_canvas_size(&mut self, canvas_id: &str, width: u32, height: u32) {
        self.canvas_sizes
            .insert(canvas_id.to_string(), (width, height));
    }

    fn replace_with_notice(&mut self, canvas_id: &str, message: &str) {
        // The replacement destroys the canvas node along with the rest of the
        // container content.
        self.containers.remove(canvas_id);
        self.canvas_sizes.remove(canvas_id);
        self.notices.insert(canvas_id.to_string(), message.to_string());
    }
}
