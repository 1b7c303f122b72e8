//! End-to-end dispatch behavior: routing, ordering, failure policies.

use std::sync::{Arc, Mutex};

use minibus::{Bus, Config, DispatchPolicy, Envelope, Error, Handler, Result, payload};

/// Shared call-order trace for handler assertions.
fn trace() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Clone) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let writer = {
        let log = log.clone();
        move |entry: &str| log.lock().unwrap().push(entry.to_string())
    };
    (log, writer)
}

#[test]
fn handlers_only_receive_their_own_event() {
    let bus = Bus::default();
    bus.register_event("A");
    bus.register_event("B");

    let (log, write) = trace();
    {
        let write = write.clone();
        bus.subscribe("A", move |_| {
            write("a");
            Ok(())
        });
    }
    bus.subscribe("B", move |_| {
        write("b");
        Ok(())
    });

    bus.publish("A", None).unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["a"]);
}

#[test]
fn unregistered_publish_fails_and_runs_nothing() {
    let bus = Bus::default();
    let (log, write) = trace();
    bus.subscribe("Ghost", move |_| {
        write("ghost");
        Ok(())
    });

    let result = bus.publish("Ghost", None);
    assert!(matches!(result, Err(Error::UnknownEvent(_))));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn handlers_run_in_subscription_order() {
    let bus = Bus::default();
    bus.register_event("Ordered");

    let (log, write) = trace();
    for name in ["h1", "h2", "h3"] {
        let write = write.clone();
        bus.subscribe("Ordered", move |_| {
            write(name);
            Ok(())
        });
    }

    for _ in 0..3 {
        bus.publish("Ordered", None).unwrap();
    }
    assert_eq!(
        *log.lock().unwrap(),
        vec!["h1", "h2", "h3", "h1", "h2", "h3", "h1", "h2", "h3"]
    );
}

#[test]
fn double_subscription_runs_twice() {
    let bus = Bus::default();
    bus.register_event("Dup");

    let (log, write) = trace();
    let handler = move |_: &Envelope| {
        write("hit");
        Ok(())
    };
    bus.subscribe("Dup", handler.clone());
    bus.subscribe("Dup", handler);

    bus.publish("Dup", None).unwrap();
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn signup_event_reaches_handler_before_publish_returns() {
    let bus = Bus::default();
    bus.register_event("UserSignedUp");

    let log: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
    {
        let log = log.clone();
        bus.subscribe("UserSignedUp", move |event| {
            log.lock().unwrap().push((
                event.name().to_string(),
                event.field("user")?.as_str().unwrap_or_default().to_string(),
            ));
            Ok(())
        });
    }

    bus.publish("UserSignedUp", payload! { user: "Jane" }).unwrap();
    assert_eq!(
        *log.lock().unwrap(),
        vec![("UserSignedUp".to_string(), "Jane".to_string())]
    );
}

#[test]
fn fail_fast_stops_remaining_handlers() {
    let bus = Bus::default();
    bus.register_event("Checkout");

    let (log, write) = trace();
    bus.subscribe("Checkout", |_| Err(Error::external("card declined")));
    bus.subscribe("Checkout", move |_| {
        write("b");
        Ok(())
    });

    let result = bus.publish("Checkout", None);
    match result {
        Err(Error::HandlerFailure { event, source }) => {
            assert_eq!(event.as_str(), "Checkout");
            assert!(matches!(*source, Error::External(_)));
        }
        other => panic!("expected HandlerFailure, got {other:?}"),
    }
    assert!(log.lock().unwrap().is_empty(), "B must not have run");
}

#[test]
fn best_effort_runs_all_handlers_and_aggregates() {
    let config = Config::default().with_dispatch_policy(DispatchPolicy::BestEffort);
    let bus = Bus::new(config);
    bus.register_event("Checkout");

    let (log, write) = trace();
    bus.subscribe("Checkout", |_| Err(Error::external("first")));
    {
        let write = write.clone();
        bus.subscribe("Checkout", move |_| {
            write("b");
            Ok(())
        });
    }
    bus.subscribe("Checkout", |_| Err(Error::external("third")));

    match bus.publish("Checkout", None) {
        Err(Error::AggregateFailure { event, errors }) => {
            assert_eq!(event.as_str(), "Checkout");
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected AggregateFailure, got {other:?}"),
    }
    assert_eq!(*log.lock().unwrap(), vec!["b"]);
}

#[test]
fn missing_field_surfaces_inside_handler() {
    let bus = Bus::default();
    bus.register_event("Checkout");
    bus.subscribe("Checkout", |event| {
        event.field("amount")?;
        Ok(())
    });

    // Wrong field names pass publish and fail in the handler.
    match bus.publish("Checkout", payload! { total: 10 }) {
        Err(Error::HandlerFailure { source, .. }) => {
            assert!(matches!(*source, Error::FieldNotFound(ref f) if f == "amount"));
        }
        other => panic!("expected HandlerFailure, got {other:?}"),
    }
}

#[test]
fn attached_handler_binds_under_its_type_name() {
    struct Welcome {
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Handler for Welcome {
        fn record(&self, event: &Envelope) -> Result {
            self.log
                .lock()
                .unwrap()
                .push(event.field("user")?.to_string());
            Ok(())
        }
    }

    let bus = Bus::default();
    bus.register_event("Welcome");

    let log = Arc::new(Mutex::new(Vec::new()));
    let handle = bus.attach(Welcome { log: log.clone() });
    assert_eq!(handle.event().as_str(), "Welcome");

    bus.publish("Welcome", payload! { user: "Jane" }).unwrap();
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn unsubscribe_removes_only_the_target() {
    let bus = Bus::default();
    bus.register_event("Tick");

    let (log, write) = trace();
    let first = {
        let write = write.clone();
        bus.subscribe("Tick", move |_| {
            write("first");
            Ok(())
        })
    };
    bus.subscribe("Tick", move |_| {
        write("second");
        Ok(())
    });

    assert!(bus.unsubscribe(&first));
    assert!(!bus.unsubscribe(&first));

    bus.publish("Tick", None).unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["second"]);
}

#[test]
fn every_publish_gets_a_fresh_envelope_id() {
    let bus = Bus::default();
    bus.register_event("Seq");

    let ids = Arc::new(Mutex::new(Vec::new()));
    {
        let ids = ids.clone();
        bus.subscribe("Seq", move |event| {
            ids.lock().unwrap().push(event.id());
            Ok(())
        });
    }

    bus.publish("Seq", None).unwrap();
    bus.publish("Seq", None).unwrap();

    let ids = ids.lock().unwrap();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}
