use crate::relay::ParamField;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Explicit observer list for "a parameter changed" events.
///
/// Front-ends forward one notification per input edit; subscribers run in
/// the order they subscribed, synchronously.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: usize,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(ParamField)>)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(ParamField) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn notify(&mut self, field: ParamField) {
        log::debug!("[notify] {} changed", field.id());
        for (_, handler) in self.subscribers.iter_mut() {
            handler(field);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
