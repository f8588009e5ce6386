//! Integration tests for [`cpl_bot::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the handle phase and
//! reaching after(), and Continue when no handler claims the message.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cpl_bot::{Handler, HandlerChain, HandlerResponse, Message};

mod common;
use common::text_message;

/// Counts calls of each phase and returns a fixed response from handle().
struct CountingHandler {
    before: AtomicUsize,
    handle: AtomicUsize,
    after: AtomicUsize,
    response: HandlerResponse,
}

impl CountingHandler {
    fn new(response: HandlerResponse) -> Arc<Self> {
        Arc::new(Self {
            before: AtomicUsize::new(0),
            handle: AtomicUsize::new(0),
            after: AtomicUsize::new(0),
            response,
        })
    }
}

#[async_trait]
impl Handler for CountingHandler {
    async fn before(&self, _message: &Message) -> cpl_bot::Result<bool> {
        self.before.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> cpl_bot::Result<HandlerResponse> {
        self.handle.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> cpl_bot::Result<()> {
        self.after.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// **Test: No handler claims the message; every phase runs once per handler and the result is Continue.**
#[tokio::test]
async fn test_chain_without_claim_returns_continue() {
    let first = CountingHandler::new(HandlerResponse::Continue);
    let second = CountingHandler::new(HandlerResponse::Continue);
    let chain = HandlerChain::new()
        .add_handler(first.clone())
        .add_handler(second.clone());

    let result = chain.handle(&text_message(1, "hello")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    for h in [&first, &second] {
        assert_eq!(h.before.load(Ordering::SeqCst), 1);
        assert_eq!(h.handle.load(Ordering::SeqCst), 1);
        assert_eq!(h.after.load(Ordering::SeqCst), 1);
    }
}

/// **Test: before() returning false stops the chain; handle and after never run.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> cpl_bot::Result<bool> {
            Ok(false)
        }
    }

    let counting = CountingHandler::new(HandlerResponse::Continue);
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(counting.clone());

    let result = chain.handle(&text_message(1, "hello")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(counting.handle.load(Ordering::SeqCst), 0);
    assert_eq!(counting.after.load(Ordering::SeqCst), 0);
}

/// **Test: Reply ends the handle phase; later handlers are skipped but all after() hooks see the reply.**
#[tokio::test]
async fn test_reply_stops_handle_phase_and_reaches_after() {
    struct CaptureHandler {
        seen: Mutex<Option<HandlerResponse>>,
    }

    #[async_trait]
    impl Handler for CaptureHandler {
        async fn after(&self, _message: &Message, response: &HandlerResponse) -> cpl_bot::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let capture = Arc::new(CaptureHandler {
        seen: Mutex::new(None),
    });
    let replier = CountingHandler::new(HandlerResponse::Reply("Breakeven CPL: 1".to_string()));
    let skipped = CountingHandler::new(HandlerResponse::Continue);

    let chain = HandlerChain::new()
        .add_handler(capture.clone())
        .add_handler(replier.clone())
        .add_handler(skipped.clone());

    let result = chain.handle(&text_message(1, "/cpl 1 100 0")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("Breakeven CPL: 1".to_string()));
    assert_eq!(skipped.handle.load(Ordering::SeqCst), 0);
    assert_eq!(skipped.after.load(Ordering::SeqCst), 1);
    assert_eq!(*capture.seen.lock().unwrap(), Some(result));
}

/// **Test: before runs first→last, after runs last→first.**
#[tokio::test]
async fn test_handlers_order() {
    struct OrderHandler {
        name: &'static str,
        order: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> cpl_bot::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(&self, _message: &Message, _response: &HandlerResponse) -> cpl_bot::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let order = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first",
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second",
            order: order.clone(),
        }));

    chain.handle(&text_message(1, "hello")).await.unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

/// **Test: Handlers held as trait objects still report their concrete type name for logs.**
#[test]
fn test_handler_name_through_trait_object() {
    let logging: Arc<dyn Handler> = Arc::new(cpl_bot::handlers::LoggingHandler);
    let counting: Arc<dyn Handler> = CountingHandler::new(HandlerResponse::Continue);

    assert!(logging.name().ends_with("LoggingHandler"));
    assert!(counting.name().ends_with("CountingHandler"));
    assert!(!counting.name().contains("dyn"));
}
