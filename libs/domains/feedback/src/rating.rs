//! Rating argument type
//!
//! Declared as `Int` in the schema, but unlike the built-in scalar it also accepts
//! integer-valued floats such as `5.0`, which JSON clients commonly send.

use async_graphql::{
    InputType, InputValueError, InputValueResult, Number, Value, registry::Registry,
};
use std::borrow::Cow;
use validator::ValidationError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Rating(pub i32);

impl Rating {
    pub fn value(self) -> i32 {
        self.0
    }
}

fn whole_i32(number: &Number) -> Option<i32> {
    let whole = match number.as_i64() {
        Some(n) => n,
        None => {
            let f = number.as_f64()?;
            if f.fract() != 0.0 || f < i32::MIN as f64 || f > i32::MAX as f64 {
                return None;
            }
            f as i64
        }
    };
    i32::try_from(whole).ok()
}

impl InputType for Rating {
    type RawValueType = i32;

    fn type_name() -> Cow<'static, str> {
        <i32 as InputType>::type_name()
    }

    fn create_type_info(registry: &mut Registry) -> String {
        <i32 as InputType>::create_type_info(registry)
    }

    fn parse(value: Option<Value>) -> InputValueResult<Self> {
        match value.unwrap_or_default() {
            Value::Number(number) => whole_i32(&number)
                .map(Rating)
                .ok_or_else(|| InputValueError::expected_type(Value::Number(number))),
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::from(self.0)
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(&self.0)
    }
}

/// `range(min = 1, max = 5)` for [`Rating`]
pub fn validate_rating(rating: &Rating) -> Result<(), ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating.0) {
        return Ok(());
    }

    let mut err =
        ValidationError::new("range").with_message("Rating must be between 1 and 5".into());
    err.add_param("min".into(), &MIN_RATING);
    err.add_param("max".into(), &MAX_RATING);
    err.add_param("value".into(), &rating.0);
    Err(err)
}
