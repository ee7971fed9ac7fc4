use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ListenerResult;
use crate::event::{
    ActivationEvent, CloseEvent, EventCategory, LifecycleEvent, ResizeEvent, WindowStateEvent,
};

/// Tombstones tolerated before a list is compacted.
const MIN_COMPACT: usize = 16;

/// Shared callback handle. Identity is the allocation, not the closure value.
pub type Listener<E> = Rc<dyn Fn(&E) -> ListenerResult>;

/// Stable handle of one registration.
///
/// Ids grow monotonically, so ordering by id is registration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ListenerId {
    category: EventCategory,
    seq: u64,
}

impl ListenerId {
    #[inline]
    pub fn category(self) -> EventCategory {
        self.category
    }
}

/// Ordered listeners of one category.
///
/// Slots are append-only; removal leaves a tombstone that is swept once
/// tombstones outnumber live entries. Push, id lookup and tombstoning are
/// O(1), the sweep is paid for by the removals that caused it.
pub struct ListenerList<E> {
    slots: Vec<Option<(u64, Listener<E>)>>,
    index: HashMap<u64, usize>,
}

impl<E> Default for ListenerList<E> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E> ListenerList<E> {
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn push(&mut self, seq: u64, listener: Listener<E>) {
        self.index.insert(seq, self.slots.len());
        self.slots.push(Some((seq, listener)));
    }

    fn remove(&mut self, seq: u64) -> bool {
        let Some(slot) = self.index.remove(&seq) else {
            return false;
        };
        self.slots[slot] = None;

        let dead = self.slots.len() - self.index.len();
        if dead >= MIN_COMPACT && dead > self.index.len() {
            self.compact();
        }
        true
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some((seq, _)) = slot {
                self.index.insert(*seq, i);
            }
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Listener<E>> {
        self.slots.iter().flatten().map(|(_, l)| l)
    }
}

/// Category -> ordered callbacks.
#[derive(Default)]
pub struct ListenerRegistry {
    next_seq: u64,
    resize: ListenerList<ResizeEvent>,
    activation: ListenerList<ActivationEvent>,
    close: ListenerList<CloseEvent>,
    window_state: ListenerList<WindowStateEvent>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registration. The same `Rc` may be registered any number of times;
    /// each registration gets its own id and its own invocation.
    pub fn register<E: LifecycleEvent>(&mut self, listener: Listener<E>) -> ListenerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        E::listeners_mut(self).push(seq, listener);
        ListenerId {
            category: E::CATEGORY,
            seq,
        }
    }

    /// Remove one registration. Unknown ids, or ids of another category, are a no-op.
    pub fn unregister(&mut self, category: EventCategory, id: ListenerId) -> bool {
        if id.category != category {
            return false;
        }
        match category {
            EventCategory::Resize => self.resize.remove(id.seq),
            EventCategory::Activation => self.activation.remove(id.seq),
            EventCategory::Close => self.close.remove(id.seq),
            EventCategory::WindowState => self.window_state.remove(id.seq),
        }
    }

    /// Remove the earliest registration of this exact callback.
    ///
    /// Scans the category, so it is linear in its size; hold on to the
    /// [`ListenerId`] and use [`ListenerRegistry::unregister`] on hot paths.
    pub fn unregister_callback<E: LifecycleEvent>(&mut self, listener: &Listener<E>) -> bool {
        let list = E::listeners_mut(self);
        let seq = list
            .slots
            .iter()
            .flatten()
            .find(|(_, l)| Rc::ptr_eq(l, listener))
            .map(|(seq, _)| *seq);

        match seq {
            Some(seq) => list.remove(seq),
            None => false,
        }
    }

    pub fn len(&self, category: EventCategory) -> usize {
        match category {
            EventCategory::Resize => self.resize.len(),
            EventCategory::Activation => self.activation.len(),
            EventCategory::Close => self.close.len(),
            EventCategory::WindowState => self.window_state.len(),
        }
    }

    /// Invoke every listener of `E`'s category in registration order.
    ///
    /// Stops at the first failure and returns it tagged with the category.
    pub fn dispatch<E: LifecycleEvent>(&self, event: &E) -> ListenerResult {
        for listener in E::listeners(self).iter() {
            listener(event).map_err(|e| e.in_category(E::CATEGORY))?;
        }
        Ok(())
    }
}

macro_rules! impl_lifecycle_event {
    ($ty:ty, $category:expr, $field:ident) => {
        impl LifecycleEvent for $ty {
            const CATEGORY: EventCategory = $category;

            #[inline]
            fn listeners(reg: &ListenerRegistry) -> &ListenerList<Self> {
                &reg.$field
            }

            #[inline]
            fn listeners_mut(reg: &mut ListenerRegistry) -> &mut ListenerList<Self> {
                &mut reg.$field
            }
        }
    };
}

impl_lifecycle_event!(ResizeEvent, EventCategory::Resize, resize);
impl_lifecycle_event!(ActivationEvent, EventCategory::Activation, activation);
impl_lifecycle_event!(CloseEvent, EventCategory::Close, close);
impl_lifecycle_event!(WindowStateEvent, EventCategory::WindowState, window_state);
