// web_app/search/session.rs - Tokio driver for the search controller
//
// Consumes a stream of user changes and runs the debounced trigger with a
// single resettable sleep owned by the session. The in-flight request is
// polled alongside the input, so changes are applied while it is pending.
// At most one request is in flight; a timer that comes due during a fetch
// fires once the response is applied. When the input channel closes,
// pending work is still finished.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use super::controller::{SearchController, SearchRequest};
use super::debounce::{Ticket, Trigger};
use super::url::UrlStore;
use crate::web_app::api::{ApiError, ProductApi};
use crate::web_app::model::ProductPage;

type Fetch<'a> = Pin<Box<dyn Future<Output = Result<ProductPage, ApiError>> + 'a>>;

/// A request that has been issued and not answered yet
struct InFlight<'a> {
    request: SearchRequest,
    fetch: Fetch<'a>,
}

/// A user interaction on the search page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryChange {
    Text(String),
    Page(u32),
    PageSize(u32),
}

pub struct SearchSession<A, U> {
    api: A,
    controller: SearchController<U>,
}

impl<A: ProductApi, U: UrlStore> SearchSession<A, U> {
    pub fn new(api: A, controller: SearchController<U>) -> Self {
        Self { api, controller }
    }

    pub fn controller(&self) -> &SearchController<U> {
        &self.controller
    }

    /// Drive the controller until `changes` closes and nothing is pending
    pub async fn run(self, mut changes: mpsc::Receiver<QueryChange>) -> SearchController<U> {
        let Self {
            api,
            mut controller,
        } = self;
        let sleep = time::sleep(std::time::Duration::ZERO);
        tokio::pin!(sleep);
        let mut pending: Option<Ticket> = None;
        let mut in_flight: Option<InFlight<'_>> = None;
        let mut open = true;

        let trigger = controller.mount();
        Self::arm(&mut pending, sleep.as_mut(), trigger);

        loop {
            if !open && pending.is_none() && in_flight.is_none() {
                break;
            }
            tokio::select! {
                change = changes.recv(), if open => match change {
                    Some(change) => {
                        let trigger = Self::apply_change(&mut controller, change);
                        Self::arm(&mut pending, sleep.as_mut(), trigger);
                    }
                    None => open = false,
                },
                () = &mut sleep, if pending.is_some() && in_flight.is_none() => {
                    if let Some(ticket) = pending.take() {
                        in_flight = controller
                            .fire(ticket)
                            .map(|request| Self::start(&api, request));
                    }
                }
                result = Self::settle(&mut in_flight), if in_flight.is_some() => {
                    if let Some(done) = in_flight.take() {
                        let trigger = controller.apply(&done.request, result).trigger();
                        Self::arm(&mut pending, sleep.as_mut(), trigger);
                    }
                }
            }
        }

        controller
    }

    fn apply_change(controller: &mut SearchController<U>, change: QueryChange) -> Trigger {
        tracing::trace!("Query change: {:?}", change);
        match change {
            QueryChange::Text(text) => controller.set_text(text),
            QueryChange::Page(page) => controller.set_page(page),
            QueryChange::PageSize(size) => controller.set_page_size(size),
        }
    }

    fn start(api: &A, request: SearchRequest) -> InFlight<'_> {
        let query = request.query.clone();
        InFlight {
            request,
            fetch: Box::pin(async move { api.search(&query).await }),
        }
    }

    async fn settle(in_flight: &mut Option<InFlight<'_>>) -> Result<ProductPage, ApiError> {
        match in_flight {
            Some(in_flight) => in_flight.fetch.as_mut().await,
            None => std::future::pending().await,
        }
    }

    fn arm(pending: &mut Option<Ticket>, sleep: Pin<&mut time::Sleep>, trigger: Trigger) {
        match trigger {
            Trigger::Schedule(ticket) => {
                sleep.reset(Instant::now() + ticket.delay);
                *pending = Some(ticket);
            }
            Trigger::Cleared => *pending = None,
            Trigger::Idle => {}
        }
    }
}
