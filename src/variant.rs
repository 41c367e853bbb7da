//! The tagged-union substrate: a reflective trait over closed variant sets,
//! a declaration macro, and a one-arm partial match helper.
//!
//! Rust enums already are tagged unions; payload shapes are checked when the
//! program compiles, and `match` enforces exhaustiveness statically. What the
//! language does not give us is the variant set *as data* — the piece the
//! by-name dispatch table in [`crate::dispatch`] needs. `Tagged` is that piece.

/// A type with a closed, fixed set of named variants.
///
/// Implemented via [`tagged_union!`]; the two items together let generic code
/// ask "which variant is this?" and "which variants exist?" without knowing
/// the concrete enum.
pub trait Tagged {
    /// Every declared variant name, in declaration order. Closed at
    /// definition time: no tag outside this list can ever be active.
    const TAGS: &'static [&'static str];

    /// The active variant's name. Always one of [`Tagged::TAGS`].
    fn tag(&self) -> &'static str;
}

/// Declares an enum and implements [`Tagged`] for it.
///
/// Unit, tuple, and struct-field variants are all accepted, and attributes
/// (including derives) pass through untouched:
///
/// ```
/// use tagged_union_patterns::tagged_union;
///
/// tagged_union! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Shape {
///         Point,
///         Circle(f64),
///         Rect { width: f64, height: f64 },
///     }
/// }
/// ```
///
/// Construction with the wrong payload shape stays a compile error, as with
/// any enum; the macro only adds the runtime tag surface.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(< $($gen:ident),+ >)? {
            $(
                $variant:ident
                $( ( $($tuple:ty),+ $(,)? ) )?
                $( { $($field:ident : $fty:ty),+ $(,)? } )?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name $(< $($gen),+ >)? {
            $(
                $variant
                $( ( $($tuple),+ ) )?
                $( { $($field : $fty),+ } )?
            ),+
        }

        impl $(< $($gen),+ >)? $crate::Tagged for $name $(< $($gen),+ >)? {
            const TAGS: &'static [&'static str] = &[$(stringify!($variant)),+];

            fn tag(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => stringify!($variant), )+
                }
            }
        }
    };
}

/// One-arm partial dispatch: run `body` only if `value`'s active tag is `tag`.
///
/// Returns `None` on a non-matching tag, leaving the caller's control flow
/// untouched — the by-name analogue of a bare `if let` arm. `body` still
/// destructures the payload itself, so nothing is bound on the miss path.
pub fn when<T, R, F>(value: &T, tag: &str, body: F) -> Option<R>
where
    T: Tagged,
    F: FnOnce(&T) -> R,
{
    if value.tag() == tag {
        Some(body(value))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    tagged_union! {
        #[derive(Debug, Clone, PartialEq)]
        enum Message {
            Quit,
            Move { x: i32, y: i32 },
            Write(String),
            ChangeColor(u8, u8, u8),
        }
    }

    #[test]
    fn tags_are_declared_in_order() {
        assert_eq!(Message::TAGS, &["Quit", "Move", "Write", "ChangeColor"]);
    }

    #[test]
    fn active_tag_matches_every_payload_shape() {
        assert_eq!(Message::Quit.tag(), "Quit");
        assert_eq!(Message::Move { x: 1, y: 2 }.tag(), "Move");
        assert_eq!(Message::Write("hi".to_string()).tag(), "Write");
        assert_eq!(Message::ChangeColor(1, 2, 3).tag(), "ChangeColor");
    }

    #[test]
    fn construction_round_trips_payloads() {
        let msg = Message::Move { x: 4, y: -7 };
        match msg {
            Message::Move { x, y } => {
                assert_eq!((x, y), (4, -7));
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn equality_is_tag_plus_payload() {
        assert_eq!(Message::Quit, Message::Quit);
        assert_eq!(
            Message::Write("a".to_string()),
            Message::Write("a".to_string())
        );
        assert_ne!(
            Message::Write("a".to_string()),
            Message::Write("b".to_string())
        );
        assert_ne!(Message::Quit, Message::Write("a".to_string()));
    }

    #[test]
    fn when_runs_only_on_the_matching_tag() {
        let msg = Message::Write("log line".to_string());

        let hit = when(&msg, "Write", |m| match m {
            Message::Write(text) => text.len(),
            _ => 0,
        });
        assert_eq!(hit, Some(8));

        let miss = when(&msg, "Quit", |_| unreachable!("body must not run"));
        assert_eq!(miss, None::<()>);
    }

    #[test]
    fn generic_enums_get_tags_too() {
        tagged_union! {
            #[derive(Debug)]
            enum Either<L, R> {
                Left(L),
                Right(R),
            }
        }

        let l: Either<i32, String> = Either::Left(1);
        let r: Either<i32, String> = Either::Right("x".to_string());
        assert_eq!(l.tag(), "Left");
        assert_eq!(r.tag(), "Right");
        assert_eq!(<Either<i32, String>>::TAGS, &["Left", "Right"]);
    }
}
