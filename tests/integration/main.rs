#![allow(clippy::module_name_repetitions)]
#![forbid(non_ascii_idents, unsafe_code)]

mod binary;
mod reference_flow;

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use slog::{Drain, Key, Never, OwnedKVList, Record, Serializer, KV as _};

/// Logged record: its message and its `count` value, if any.
type Entry = (String, Option<String>);

/// [`Drain`] collecting all the logged records.
#[derive(Clone, Debug, Default)]
pub struct Records(Arc<Mutex<Vec<Entry>>>);

impl Records {
    /// Returns `count` values of the collected records with the provided
    /// `msg`.
    pub fn counts_of(&self, msg: &str) -> Vec<i64> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == msg)
            .filter_map(|(_, count)| count.as_ref())
            .map(|count| count.parse().unwrap())
            .collect()
    }
}

impl Drain for Records {
    type Ok = ();
    type Err = Never;

    fn log(
        &self,
        record: &Record<'_>,
        _: &OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        let mut count = CountValue::default();
        let _ = record.kv().serialize(record, &mut count);
        self.0
            .lock()
            .unwrap()
            .push((record.msg().to_string(), count.0));
        Ok(())
    }
}

/// [`Serializer`] extracting the `count` key of a record.
#[derive(Default)]
struct CountValue(Option<String>);

impl Serializer for CountValue {
    fn emit_arguments(
        &mut self,
        key: Key,
        val: &fmt::Arguments<'_>,
    ) -> slog::Result {
        if key == "count" {
            self.0 = Some(val.to_string());
        }
        Ok(())
    }
}
