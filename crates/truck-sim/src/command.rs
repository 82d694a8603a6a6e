//! Remote command handlers.
//!
//! Both handlers report their outcome only through the one-shot event text.
//! The caller acknowledges the remote command regardless; a returned
//! [`RouteRequest`] means the command was accepted and a route is needed.

use tracing::info;
use truck_core::{ContentsState, TaskState};

use crate::{RouteRequest, Truck};

/// Event reported when the oracle fails or times out.
pub const ROUTE_FAILED_EVENT: &str = "Failed to find map route";

impl Truck {
    /// `GoToCustomer(customer)`: drive to the customer at that index.
    ///
    /// Rejected when the index is unknown, while the truck is busy at base or
    /// delivering, when it has nothing to deliver, or while another route
    /// request is still outstanding.
    pub fn go_to_customer(&mut self, customer: i64) -> Option<RouteRequest> {
        let Ok(site) = self.sites.customer(customer) else {
            self.state.set_event(format!("Invalid customer: {customer}"));
            return None;
        };

        match self.state.task {
            TaskState::Dumping | TaskState::Loading | TaskState::Delivering => {
                self.state.set_event(format!("Unable to act - {:?}", self.state.task));
                None
            }

            TaskState::Ready | TaskState::Enroute | TaskState::Returning => {
                if self.state.contents == ContentsState::Empty {
                    self.state.set_event("Unable to act - empty");
                    return None;
                }
                if self.route_pending() {
                    self.state.set_event("Unable to act - route pending");
                    return None;
                }

                info!(customer, destination = %site, "dispatching to customer");
                self.state.set_event(format!("New customer: {customer}"));
                self.state.destination = site;
                Some(self.request_route(TaskState::Enroute))
            }
        }
    }

    /// `Recall()`: abandon the current delivery run and drive back to base.
    ///
    /// Only possible while driving to a customer.
    pub fn recall(&mut self) -> Option<RouteRequest> {
        match self.state.task {
            TaskState::Ready | TaskState::Loading | TaskState::Dumping => {
                self.state.set_event("Already at base");
                None
            }

            TaskState::Returning => {
                self.state.set_event("Already returning");
                None
            }

            TaskState::Delivering => {
                self.state.set_event(format!("Unable to recall - {:?}", self.state.task));
                None
            }

            TaskState::Enroute => {
                info!("recalled to base");
                Some(self.return_to_base())
            }
        }
    }
}
