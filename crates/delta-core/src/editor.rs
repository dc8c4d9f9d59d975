//! Editor surface contract
//!
//! The text widget lives outside the core. The workbench only reads and
//! writes its full text and is told about every edit.

pub trait EditorSurface {
    fn get_value(&self) -> String;

    /// Replace the whole text. Callers check for equality first so an
    /// unchanged value never resets cursor or undo state.
    fn set_value(&mut self, text: &str);

    /// Called with the full text whenever the widget reports an edit
    fn observe_change(&mut self, _text: &str) {}
}

/// Push `content` into `editor` unless it already shows it
pub fn push_if_changed(editor: &mut dyn EditorSurface, content: &str) -> bool {
    if editor.get_value() == content {
        return false;
    }
    editor.set_value(content);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Buffer {
        text: String,
        sets: usize,
    }

    impl EditorSurface for Buffer {
        fn get_value(&self) -> String {
            self.text.clone()
        }

        fn set_value(&mut self, text: &str) {
            self.text = text.to_string();
            self.sets += 1;
        }
    }

    #[test]
    fn test_push_if_changed() {
        let mut buffer = Buffer::default();

        assert!(push_if_changed(&mut buffer, "print(1)"));
        assert!(!push_if_changed(&mut buffer, "print(1)"));
        assert_eq!(buffer.sets, 1);
        assert_eq!(buffer.get_value(), "print(1)");
    }
}
