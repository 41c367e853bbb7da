//! Runtime dispatch tables: handlers keyed by variant name.
//!
//! `match` is the right tool when the arms are known where the value is
//! consumed. The table form covers the other case — arms assembled
//! dynamically, checked for coverage once, then applied to any number of
//! values. Coverage problems surface where the table is *built*, not on the
//! first unlucky dispatch.

use std::collections::HashMap;

use thiserror::Error;

use crate::variant::Tagged;

/// A problem detected while defining a dispatch table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The arm names a tag the union never declared.
    #[error("`{tag}` is not a declared variant")]
    UnknownTag { tag: String },

    /// Two arms for the same tag; exactly one handler may own a variant.
    #[error("variant `{tag}` already has a handler")]
    DuplicateArm { tag: String },

    /// Some variants have no handler and no fallback was supplied.
    #[error("no handler for {missing:?} and no fallback")]
    NonExhaustive { missing: Vec<&'static str> },
}

type Handler<'h, T, R> = Box<dyn FnMut(&T) -> R + 'h>;

/// Collects arms for a [`Dispatcher`]. Obtained via [`Dispatcher::builder`].
pub struct DispatcherBuilder<'h, T: Tagged, R> {
    arms: HashMap<&'static str, Handler<'h, T, R>>,
    fallback: Option<Handler<'h, T, R>>,
}

impl<'h, T: Tagged, R> DispatcherBuilder<'h, T, R> {
    /// Registers `handler` for the variant named `tag`.
    ///
    /// Rejected immediately if `tag` is not one of `T`'s declared variants or
    /// already has a handler.
    pub fn arm(
        mut self,
        tag: &str,
        handler: impl FnMut(&T) -> R + 'h,
    ) -> Result<Self, DispatchError> {
        let Some(canonical) = T::TAGS.iter().copied().find(|t| *t == tag) else {
            return Err(DispatchError::UnknownTag {
                tag: tag.to_owned(),
            });
        };
        if self.arms.insert(canonical, Box::new(handler)).is_some() {
            return Err(DispatchError::DuplicateArm {
                tag: tag.to_owned(),
            });
        }
        Ok(self)
    }

    /// Registers the handler for every variant without an arm of its own.
    pub fn fallback(mut self, handler: impl FnMut(&T) -> R + 'h) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Verifies coverage and produces the dispatcher.
    ///
    /// Without a fallback, every declared variant needs an arm; the error
    /// lists exactly the tags left unhandled.
    pub fn build(self) -> Result<Dispatcher<'h, T, R>, DispatchError> {
        if self.fallback.is_none() {
            let missing: Vec<&'static str> = T::TAGS
                .iter()
                .copied()
                .filter(|tag| !self.arms.contains_key(tag))
                .collect();
            if !missing.is_empty() {
                return Err(DispatchError::NonExhaustive { missing });
            }
        }
        Ok(Dispatcher {
            arms: self.arms,
            fallback: self.fallback,
        })
    }
}

/// A verified dispatch table: every value of `T` routes to exactly one
/// handler.
///
/// Dispatch itself is pure selection; any side effects belong to the
/// handlers, which is why they are `FnMut` and dispatch takes `&mut self`.
pub struct Dispatcher<'h, T: Tagged, R> {
    arms: HashMap<&'static str, Handler<'h, T, R>>,
    fallback: Option<Handler<'h, T, R>>,
}

impl<'h, T: Tagged, R> Dispatcher<'h, T, R> {
    pub fn builder() -> DispatcherBuilder<'h, T, R> {
        DispatcherBuilder {
            arms: HashMap::new(),
            fallback: None,
        }
    }

    /// Invokes the one handler owning `value`'s active tag. O(1).
    pub fn dispatch(&mut self, value: &T) -> R {
        match self.arms.get_mut(value.tag()) {
            Some(handler) => handler(value),
            None => {
                let fallback = self
                    .fallback
                    .as_mut()
                    .expect("build() rejects partial coverage without a fallback");
                fallback(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagged_union;
    use proptest::prelude::*;

    tagged_union! {
        #[derive(Debug, Clone, PartialEq)]
        enum Event {
            Connected,
            Data(Vec<u8>),
            Closed { reason: String },
        }
    }

    #[test]
    fn each_variant_routes_to_its_own_handler() {
        use std::cell::Cell;

        let connected = Cell::new(0u32);
        let data = Cell::new(0u32);
        let closed = Cell::new(0u32);

        let mut table = Dispatcher::builder()
            .arm("Connected", |_: &Event| connected.set(connected.get() + 1))
            .unwrap()
            .arm("Data", |_: &Event| data.set(data.get() + 1))
            .unwrap()
            .arm("Closed", |_: &Event| closed.set(closed.get() + 1))
            .unwrap()
            .build()
            .unwrap();

        table.dispatch(&Event::Connected);
        table.dispatch(&Event::Data(vec![1, 2]));
        table.dispatch(&Event::Closed {
            reason: "eof".to_string(),
        });
        table.dispatch(&Event::Data(vec![]));

        assert_eq!(
            (connected.get(), data.get(), closed.get()),
            (1, 2, 1)
        );
    }

    #[test]
    fn handlers_recover_the_payload_unchanged() {
        let mut table = Dispatcher::builder()
            .arm("Data", |e: &Event| match e {
                Event::Data(bytes) => bytes.clone(),
                _ => Vec::new(),
            })
            .unwrap()
            .fallback(|_| Vec::new())
            .build()
            .unwrap();

        let payload = vec![0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(table.dispatch(&Event::Data(payload.clone())), payload);
    }

    #[test]
    fn fallback_covers_unhandled_variants() {
        let mut table = Dispatcher::builder()
            .arm("Connected", |_: &Event| "up")
            .unwrap()
            .fallback(|_| "other")
            .build()
            .unwrap();

        assert_eq!(table.dispatch(&Event::Connected), "up");
        assert_eq!(
            table.dispatch(&Event::Closed {
                reason: "eof".to_string()
            }),
            "other"
        );
    }

    #[test]
    fn unknown_tag_is_rejected_when_the_arm_is_added() {
        let err = Dispatcher::<Event, ()>::builder()
            .arm("Disconnected", |_| ())
            .err()
            .unwrap();
        assert_eq!(
            err,
            DispatchError::UnknownTag {
                tag: "Disconnected".to_string()
            }
        );
    }

    #[test]
    fn duplicate_arm_is_rejected() {
        let err = Dispatcher::<Event, ()>::builder()
            .arm("Connected", |_| ())
            .unwrap()
            .arm("Connected", |_| ())
            .err()
            .unwrap();
        assert_eq!(
            err,
            DispatchError::DuplicateArm {
                tag: "Connected".to_string()
            }
        );
    }

    #[test]
    fn partial_coverage_without_fallback_fails_at_build() {
        let err = Dispatcher::<Event, ()>::builder()
            .arm("Connected", |_| ())
            .unwrap()
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err,
            DispatchError::NonExhaustive {
                missing: vec!["Data", "Closed"]
            }
        );
    }

    fn arb_event() -> impl Strategy<Value = Event> {
        prop_oneof![
            Just(Event::Connected),
            prop::collection::vec(any::<u8>(), 0..16).prop_map(Event::Data),
            "[a-z]{0,12}".prop_map(|reason| Event::Closed { reason }),
        ]
    }

    proptest! {
        #[test]
        fn generated_payloads_round_trip_through_the_table(
            bytes in prop::collection::vec(any::<u8>(), 0..32)
        ) {
            let mut table = Dispatcher::builder()
                .arm("Connected", |_: &Event| Vec::new())
                .unwrap()
                .arm("Data", |e: &Event| match e {
                    Event::Data(bytes) => bytes.clone(),
                    _ => Vec::new(),
                })
                .unwrap()
                .arm("Closed", |_: &Event| Vec::new())
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(table.dispatch(&Event::Data(bytes.clone())), bytes);
        }

        #[test]
        fn every_generated_event_routes_by_its_tag(event in arb_event()) {
            // Each handler names itself; routing is correct iff the answer
            // matches the value's own tag.
            let mut table = Dispatcher::builder()
                .arm("Connected", |_: &Event| "Connected")
                .unwrap()
                .arm("Data", |_: &Event| "Data")
                .unwrap()
                .arm("Closed", |_: &Event| "Closed")
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(table.dispatch(&event), event.tag());
        }
    }
}
