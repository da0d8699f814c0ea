use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::State;

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<State> for String {
    fn from(state: State) -> String {
        format!("{state}")
    }
}

impl From<State> for &'static str {
    fn from(state: State) -> &'static str {
        match state {
            State::Draft => "draft",
            State::Published => "published",
            State::Archived => "archived",
        }
    }
}

impl FromStr for State {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "draft" => Ok(State::Draft),
            "published" => Ok(State::Published),
            "archived" => Ok(State::Archived),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for State {
        fn value_variants<'a>() -> &'a [Self] {
            &[
                State::Draft,
                State::Published,
                State::Archived,
            ]
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            Some(PossibleValue::new(<&'static str>::from(*self)))
        }
    }
}
