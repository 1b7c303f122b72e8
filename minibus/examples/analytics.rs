use minibus::*;

// Define a typed event
#[derive(Event, serde::Serialize, serde::Deserialize)]
struct PaidContentPurchased {
    user_id: u64,
    content_id: u64,
    content_type: String,
}

// A handler named after the event it reacts to; `attach` binds it under
// its own type name, so no extra wiring is needed.
struct Recorder;

impl Handler for Recorder {
    fn event_name(&self) -> std::borrow::Cow<'static, str> {
        PaidContentPurchased::event_name()
    }

    fn record(&self, event: &Envelope) -> Result {
        let purchase: PaidContentPurchased = event.decode()?;

        println!("EVENT {} ({})", event.name(), event.id());
        println!();
        println!("USER ID      {}", purchase.user_id);
        println!("CONTENT ID   {}", purchase.content_id);
        println!("CONTENT TYPE {}", purchase.content_type);
        println!();
        println!("Saving event in DB, enqueuing background job for export..");
        Ok(())
    }
}

fn main() -> Result {
    tracing_subscriber::fmt().init();

    let bus = Bus::default();

    // Bootstrap: declare the event and bind the handler
    bus.register::<PaidContentPurchased>();
    bus.attach(Recorder);

    // In the context of a request handler..
    bus.emit(&PaidContentPurchased {
        user_id: 1,
        content_id: 1,
        content_type: "serie".into(),
    })?;

    // The same event can also be published from loosely-typed data
    bus.publish(
        "PaidContentPurchased",
        payload! { user_id: 2, content_id: 9, content_type: "film" },
    )?;

    Ok(())
}
