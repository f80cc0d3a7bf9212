use remap_core::{DefaultCreator, Object, Reflect, Shape, TypeMap};
use std::sync::{Arc, Mutex};
use std_util::prelude::*;

#[derive(Default)]
struct Ticket {
    title: String,
    priority: u8,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct TicketView {
    title: String,
    priority: u8,
    summary: String,
}

impl Reflect for Ticket {
    fn shape() -> Shape {
        Shape::builder::<Ticket>()
            .field("title", |t| &t.title, |t| &mut t.title)
            .field("priority", |t| &t.priority, |t| &mut t.priority)
            .build()
    }
}

impl Reflect for TicketView {
    fn shape() -> Shape {
        Shape::builder::<TicketView>()
            .field("title", |t| &t.title, |t| &mut t.title)
            .field("priority", |t| &t.priority, |t| &mut t.priority)
            .field("summary", |t| &t.summary, |t| &mut t.summary)
            .build()
    }
}

fn type_map() -> TypeMap {
    let mut type_map = TypeMap::discover(
        Ticket::shape(),
        TicketView::shape(),
        DefaultCreator::<TicketView>::new(),
    );
    assert_ok!(type_map.ignore_member("summary"));
    assert_ok!(type_map.validate());
    type_map
}

fn ticket() -> Ticket {
    Ticket {
        title: "Broken build".to_string(),
        priority: 2,
    }
}

#[test]
fn property_copy_overwrites_before_map_changes() {
    let mut type_map = type_map();
    assert_ok!(type_map.before_map(|_: &Ticket, view: &mut TicketView| {
        view.title = "placeholder".to_string();
        view.summary = "from before".to_string();
        Ok(())
    }));

    let mut view = TicketView::default();
    assert_ok!(type_map.map_func().map_into(&ticket(), &mut view));

    assert_eq!(view.title, "Broken build");
    assert_eq!(view.summary, "from before");
}

#[test]
fn after_map_sees_copied_members() {
    let mut type_map = type_map();
    assert_ok!(type_map.after_map(|ticket: &Ticket, view: &mut TicketView| {
        view.summary = format!("[P{}] {}", view.priority, ticket.title);
        Ok(())
    }));

    let mut view = TicketView::default();
    assert_ok!(type_map.map_func().map_into(&ticket(), &mut view));
    assert_eq!(view.summary, "[P2] Broken build");
}

#[test]
fn hooks_run_once_in_order() {
    let log = Arc::new(Mutex::new(vec![]));

    let mut type_map = type_map();
    type_map.set_before_map_func({
        let log = log.clone();
        move |_: &dyn Object, _: &mut dyn Object| -> remap_core::Result<()> {
            log.lock().unwrap().push("before");
            Ok(())
        }
    });
    type_map.set_after_map_func({
        let log = log.clone();
        move |_: &dyn Object, _: &mut dyn Object| -> remap_core::Result<()> {
            log.lock().unwrap().push("after");
            Ok(())
        }
    });

    assert_ok!(type_map.map_func().map(&ticket(), None));
    assert_eq!(*log.lock().unwrap(), ["before", "after"]);
}

#[test]
fn hooks_receive_the_call_objects() {
    let seen = Arc::new(Mutex::new(vec![]));

    let mut type_map = type_map();
    type_map.set_after_map_func({
        let seen = seen.clone();
        move |source: &dyn Object, destination: &mut dyn Object| -> remap_core::Result<()> {
            let source = source as *const dyn Object as *const ();
            let destination = destination as *mut dyn Object as *const ();
            seen.lock().unwrap().push((source as usize, destination as usize));
            Ok(())
        }
    });

    let ticket = ticket();
    let mut view = TicketView::default();
    assert_ok!(type_map.map_func().map_into(&ticket, &mut view));

    let expected = (
        &ticket as *const Ticket as usize,
        &view as *const TicketView as usize,
    );
    assert_eq!(*seen.lock().unwrap(), [expected]);
}

#[test]
fn before_map_error_stops_the_call() {
    let mut type_map = type_map();
    assert_ok!(type_map.before_map(|ticket: &Ticket, _: &mut TicketView| {
        if ticket.priority > 1 {
            remap_core::bail!("priority {} requires triage", ticket.priority);
        }
        Ok(())
    }));

    let mut view = TicketView::default();
    let err = assert_err!(type_map.map_func().map_into(&ticket(), &mut view));
    assert_eq!(err.to_string(), "priority 2 requires triage");
    assert_eq!(view, TicketView::default());
}

#[test]
fn after_map_is_skipped_when_a_member_fails() {
    let called = Arc::new(Mutex::new(false));

    let mut type_map = type_map();
    assert_ok!(type_map.member("title")).convert_with(remap_core::convert::try_typed(
        |_: String| -> remap_core::Result<String> { Err(remap_core::err!("bad title")) },
    ));
    type_map.set_after_map_func({
        let called = called.clone();
        move |_: &dyn Object, _: &mut dyn Object| -> remap_core::Result<()> {
            *called.lock().unwrap() = true;
            Ok(())
        }
    });

    assert_err!(type_map.map_func().map(&ticket(), None));
    assert!(!*called.lock().unwrap());
}
