//! Shared page context passed to every handler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::mount::UnmountHandle;
use leptos::tachys::view::any_view::AnyViewState;
use web_sys::{Document, HtmlElement, Window};

use crate::config::PortfolioConfig;
use crate::dom::bindings::PageBindings;
use crate::state::menu::MobileMenu;
use crate::state::notification::NotificationState;
use crate::state::reveal::RevealSet;
use crate::state::theme::Theme;
use crate::state::tracker::ActiveNav;
use crate::util::schedule::{ScheduledTasks, TaskKey};
use crate::util::throttle::Throttle;

/// Everything handlers need, owned once per setup.
///
/// Listener closures hold an `Rc<Page>`; timers and the reveal observer hold
/// a `Weak<Page>` so a late callback after teardown finds nothing to act on.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: PortfolioConfig,
    pub bindings: PageBindings,
    pub nav: RefCell<ActiveNav>,
    pub throttle: RefCell<Throttle>,
    pub menu: Cell<MobileMenu>,
    pub theme: Cell<Theme>,
    pub reveal: RefCell<RevealSet>,
    pub notification: RefCell<NotificationState>,
    pub notification_view: RefCell<Option<UnmountHandle<AnyViewState>>>,
    pub tasks: RefCell<ScheduledTasks<Timeout>>,
    ripple_seq: Cell<u64>,
}

impl Page {
    pub fn new(window: Window, document: Document, config: PortfolioConfig, bindings: PageBindings) -> Self {
        let hrefs: Vec<Option<String>> = bindings
            .nav_links
            .iter()
            .map(|link| link.get_attribute("href"))
            .collect();
        let nav = ActiveNav::from_hrefs(hrefs.iter().map(Option::as_deref));
        let reveal = RevealSet::new(bindings.reveal_targets.len());
        let throttle = Throttle::new(config.timings.scroll_throttle_ms);
        let notification = NotificationState::new(config.timings.notification_ms);

        Self {
            window,
            document,
            nav: RefCell::new(nav),
            throttle: RefCell::new(throttle),
            menu: Cell::new(MobileMenu::default()),
            theme: Cell::new(Theme::default()),
            reveal: RefCell::new(reveal),
            notification: RefCell::new(notification),
            notification_view: RefCell::new(None),
            tasks: RefCell::new(ScheduledTasks::new()),
            ripple_seq: Cell::new(0),
            config,
            bindings,
        }
    }

    /// Apply `f` to the menu state and store the result.
    pub fn update_menu<R>(&self, f: impl FnOnce(&mut MobileMenu) -> R) -> R {
        let mut menu = self.menu.get();
        let out = f(&mut menu);
        self.menu.set(menu);
        out
    }

    pub fn next_ripple_seq(&self) -> u64 {
        let seq = self.ripple_seq.get() + 1;
        self.ripple_seq.set(seq);
        seq
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

/// Run `f` after `delay_ms` unless the page is torn down first or `key` is
/// rescheduled in the meantime.
pub fn schedule<F>(page: &Rc<Page>, key: TaskKey, delay_ms: u32, f: F)
where
    F: FnOnce(&Rc<Page>) + 'static,
{
    let weak = Rc::downgrade(page);
    let replaced = page.tasks.borrow_mut().schedule_with(key, move |ticket| {
        Timeout::new(delay_ms, move || {
            let Some(page) = weak.upgrade() else {
                return;
            };
            f(&page);
            page.tasks.borrow_mut().mark_done(key, ticket);
        })
    });
    drop(replaced);
}

/// Milliseconds from a fractional delay, rounded up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_ms(delay: f64) -> u32 {
    delay.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}
