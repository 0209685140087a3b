use std::collections::VecDeque;

const MAX_VISIBLE: usize = 3;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

/// Fire-and-forget notifications shown above the active page.
#[derive(Debug, Default)]
pub struct Toasts {
    next_id: ToastId,
    items: VecDeque<Toast>,
    fresh: Vec<ToastId>,
}

impl Toasts {
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push_back(Toast {
            id,
            title: title.into(),
            description: description.into(),
            kind,
        });
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
        self.fresh.push(id);
        id
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.push(ToastKind::Info, title, description)
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.push(ToastKind::Success, title, description)
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.push(ToastKind::Error, title, description)
    }

    /// Ids pushed since the last call, so the shell can schedule their expiry.
    pub fn take_fresh(&mut self) -> Vec<ToastId> {
        std::mem::take(&mut self.fresh)
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_dropped_past_the_limit() {
        let mut toasts = Toasts::default();
        let first = toasts.info("one", "");
        for title in ["two", "three", "four"] {
            toasts.success(title, "");
        }
        assert_eq!(toasts.items.len(), MAX_VISIBLE);
        assert!(toasts.iter().all(|toast| toast.id != first));
        assert_eq!(toasts.iter().next().map(|t| t.title.as_str()), Some("two"));
    }

    #[test]
    fn fresh_ids_are_handed_out_once() {
        let mut toasts = Toasts::default();
        let a = toasts.info("a", "");
        let b = toasts.error("b", "");
        assert_eq!(toasts.take_fresh(), vec![a, b]);
        assert!(toasts.take_fresh().is_empty());
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let mut toasts = Toasts::default();
        let id = toasts.info("Record Saved", "Patient data has been saved successfully.");
        toasts.dismiss(id + 100);
        assert_eq!(toasts.items.len(), 1);
        toasts.dismiss(id);
        assert!(toasts.is_empty());
    }
}
