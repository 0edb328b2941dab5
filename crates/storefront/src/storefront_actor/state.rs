use crate::cart::{CartEvent, CartStore};
use crate::catalog::CatalogStore;
use crate::model::{StorefrontView, UiFlags};
use crate::notice::NoticeBoard;
use crate::storefront_actor::{CartChange, StorefrontAction, StorefrontActionResult, StorefrontError};
use async_trait::async_trait;
use state_actor::ActorState;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// The whole mutable state of the page.
///
/// Every control on the page maps to one [`StorefrontAction`]; [`apply`] is
/// the only way to change anything. The state is usable on its own, but in
/// the running system it is owned by a [`StateActor`](state_actor::StateActor)
/// which also clears the cart notice when its deadline passes.
///
/// [`apply`]: Storefront::apply
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartStore,
    notice: NoticeBoard,
    ui: UiFlags,
}

impl Storefront {
    pub fn new(catalog: CatalogStore, notice_ttl: Duration) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            notice: NoticeBoard::new(notice_ttl),
            ui: UiFlags::default(),
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn notice(&self) -> &NoticeBoard {
        &self.notice
    }

    pub fn ui(&self) -> UiFlags {
        self.ui
    }

    /// Applies one action at time `now`.
    pub fn apply(
        &mut self,
        action: StorefrontAction,
        now: Instant,
    ) -> Result<StorefrontActionResult, StorefrontError> {
        let result = match action {
            StorefrontAction::AddToCart(id) => {
                let product = self
                    .catalog
                    .get(&id)
                    .ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;
                let event = self.cart.add(product);
                StorefrontActionResult::AddToCart(self.announce(&event, now))
            }
            StorefrontAction::RemoveFromCart(id) => {
                let change = self.cart.remove(&id).map(|event| self.announce(&event, now));
                if change.is_none() {
                    debug!(product_id = %id, "Remove ignored, not in cart");
                }
                StorefrontActionResult::RemoveFromCart(change)
            }
            StorefrontAction::SelectCategory(category) => {
                self.catalog.set_category(category);
                StorefrontActionResult::SelectCategory(self.catalog.selected())
            }
            StorefrontAction::ClearCategory => {
                self.catalog.clear_category();
                StorefrontActionResult::ClearCategory(())
            }
            StorefrontAction::SetMenuOpen(open) => {
                self.ui.menu_open = open;
                StorefrontActionResult::SetMenuOpen(open)
            }
            StorefrontAction::SetCartOpen(open) => {
                self.ui.cart_open = open;
                StorefrontActionResult::SetCartOpen(open)
            }
            StorefrontAction::SetLoginOpen(open) => {
                self.ui.login_open = open;
                StorefrontActionResult::SetLoginOpen(open)
            }
        };
        Ok(result)
    }

    fn announce(&mut self, event: &CartEvent, now: Instant) -> CartChange {
        let message = event.notice();
        info!(notice = %message, cart_count = self.cart.count(), "Cart changed");
        self.notice.post(message, now);
        CartChange {
            quantity: event.quantity(),
            cart_count: self.cart.count(),
        }
    }

    /// Builds the snapshot handed to the rendering layer.
    pub fn view(&self) -> StorefrontView {
        StorefrontView {
            selected_category: self.catalog.selected(),
            filtered: self.catalog.filtered().cloned().collect(),
            featured: self.catalog.featured().cloned().collect(),
            cart: self.cart.entries().to_vec(),
            cart_count: self.cart.count(),
            notice: self.notice.current().map(str::to_owned),
            ui: self.ui,
        }
    }
}

#[async_trait]
impl ActorState for Storefront {
    type Action = StorefrontAction;
    type ActionResult = StorefrontActionResult;
    type Snapshot = StorefrontView;
    type Context = ();
    type Error = StorefrontError;

    fn snapshot(&self) -> StorefrontView {
        self.view()
    }

    async fn handle_action(
        &mut self,
        action: StorefrontAction,
        _ctx: &(),
    ) -> Result<StorefrontActionResult, StorefrontError> {
        self.apply(action, Instant::now())
    }

    fn deadline(&self) -> Option<Instant> {
        self.notice.deadline()
    }

    fn on_deadline(&mut self, now: Instant) -> bool {
        let cleared = self.notice.expire(now);
        if cleared {
            debug!("Cart notice cleared");
        }
        cleared
    }
}
