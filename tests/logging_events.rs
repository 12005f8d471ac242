//! Each public operation emits exactly one debug event carrying its input size.

#![cfg(feature = "cli")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use convert_collection::prelude::*;

#[derive(Debug, Default, PartialEq)]
struct Entry {
    op: Option<String>,
    hint: Option<u64>,
}

impl Visit for Entry {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "op" {
            self.op = Some(value.to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "hint" {
            self.hint = Some(value);
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

#[derive(Clone, Default)]
struct Entries(Arc<Mutex<Vec<Entry>>>);

impl<S: Subscriber> Layer<S> for Entries {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if meta.target() == "convert_collection" && *meta.level() == Level::DEBUG {
            let mut entry = Entry::default();
            event.record(&mut entry);
            self.0.lock().unwrap().push(entry);
        }
    }
}

fn capture(f: impl FnOnce()) -> Vec<Entry> {
    let entries = Entries::default();
    let subscriber = tracing_subscriber::registry().with(entries.clone());
    tracing::subscriber::with_default(subscriber, f);
    std::mem::take(&mut *entries.0.lock().unwrap())
}

fn single(op: &str, hint: u64) -> Vec<Entry> {
    vec![Entry {
        op: Some(op.to_string()),
        hint: Some(hint),
    }]
}

const INPUT: [u32; 4] = [3, 1, 2, 1];

fn ok(a: &u32, b: &u32) -> std::result::Result<std::cmp::Ordering, ()> {
    Ok(a.cmp(b))
}

fn double(n: &u32) -> std::result::Result<u32, ()> {
    Ok(n * 2)
}

fn check(op: &str, run: impl FnOnce()) {
    assert_eq!(capture(run), single(op, 4), "{op}");
}

#[test]
fn infallible_ops_log_once() {
    check("convert_into", || {
        let _ = convert_into(&INPUT, |n| *n, Vec::<u32>::new);
    });
    check("sort_and_convert_into", || {
        let _ = sort_and_convert_into(&INPUT, |a, b| a.cmp(b), |n| *n, Vec::<u32>::new);
    });
    check("convert_to_list", || {
        let _ = convert_to_list(&INPUT, |n| *n);
    });
    check("convert_to_list_with", || {
        let _ = convert_to_list_with(&INPUT, |n| *n, VecDeque::<u32>::new);
    });
    check("convert_and_sort_list", || {
        let _ = convert_and_sort_list(&INPUT, |n| *n, u32::cmp);
    });
    check("convert_and_sort_list_with", || {
        let _ = convert_and_sort_list_with(&INPUT, |n| *n, u32::cmp, VecDeque::<u32>::new);
    });
    check("sort_and_convert_list", || {
        let _ = sort_and_convert_list(&INPUT, |a, b| a.cmp(b), |n| *n);
    });
    check("sort_and_convert_list_with", || {
        let _ = sort_and_convert_list_with(&INPUT, |a, b| a.cmp(b), |n| *n, VecDeque::<u32>::new);
    });
    check("convert_to_set", || {
        let _ = convert_to_set(&INPUT, |n| *n);
    });
    check("convert_to_set_with", || {
        let _ = convert_to_set_with(&INPUT, |n| *n, IndexSet::<u32>::new);
    });
    check("convert_and_sort_set", || {
        let _ = convert_and_sort_set(&INPUT, |n| *n, u32::cmp);
    });
    check("sort_and_convert_set", || {
        let _ = sort_and_convert_set(&INPUT, |a, b| a.cmp(b), |n| *n);
    });
    check("convert_and_sort_tree_set", || {
        let _ = convert_and_sort_tree_set(&INPUT, |n| *n);
    });
}

#[test]
fn fallible_ops_log_once() {
    check("try_convert_into", || {
        let _ = try_convert_into(&INPUT, double, Vec::<u32>::new);
    });
    check("try_sort_and_convert_into", || {
        let _ = try_sort_and_convert_into(&INPUT, |a, b| ok(a, b), double, Vec::<u32>::new);
    });
    check("try_sort_by", || {
        let _ = try_sort_by(INPUT.to_vec(), ok);
    });
    check("try_convert_to_list", || {
        let _ = try_convert_to_list(&INPUT, double);
    });
    check("try_convert_to_list_with", || {
        let _ = try_convert_to_list_with(&INPUT, double, VecDeque::<u32>::new);
    });
    check("try_convert_and_sort_list", || {
        let _ = try_convert_and_sort_list(&INPUT, double, ok);
    });
    check("try_convert_and_sort_list_with", || {
        let _ = try_convert_and_sort_list_with(&INPUT, double, ok, VecDeque::<u32>::new);
    });
    check("try_sort_and_convert_list", || {
        let _ = try_sort_and_convert_list(&INPUT, |a, b| ok(a, b), double);
    });
    check("try_sort_and_convert_list_with", || {
        let _ = try_sort_and_convert_list_with(
            &INPUT,
            |a, b| ok(a, b),
            double,
            VecDeque::<u32>::new,
        );
    });
    check("try_convert_to_set", || {
        let _ = try_convert_to_set(&INPUT, double);
    });
    check("try_convert_to_set_with", || {
        let _ = try_convert_to_set_with(&INPUT, double, IndexSet::<u32>::new);
    });
    check("try_convert_and_sort_set", || {
        let _ = try_convert_and_sort_set(&INPUT, double, ok);
    });
    check("try_sort_and_convert_set", || {
        let _ = try_sort_and_convert_set(&INPUT, |a, b| ok(a, b), double);
    });
    check("try_convert_and_sort_tree_set", || {
        let _ = try_convert_and_sort_tree_set(&INPUT, double);
    });
}

#[test]
fn plan_logs_once() {
    let mut plan = ConversionPlan::new()
        .convert(|n: &u32| *n)
        .sort_after(u32::cmp)
        .container(ContainerKind::LinkedSet);

    check("conversion_plan", || {
        let _ = plan.run(&INPUT);
    });
}
