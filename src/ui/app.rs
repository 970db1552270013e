use std::time::Instant;

use uuid::Uuid;

use crate::mailer::worker::{MailCommandSender, SendCommand};
use crate::mailer::{MailError, MailPayload};
use crate::site::{SectionId, NAV_LINKS};
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState, AUTOPLAY_INTERVAL};
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer, SUCCESS_NOTICE_DURATION};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState};
use crate::ui::newsletter::{NewsletterIntent, NewsletterReducer, NewsletterState, NOTICE_DURATION};
use crate::ui::page::Page;
use crate::ui::reveal::{Reveal, VisibilityTrigger};
use crate::ui::theme::ThemeMode;

/// Which surface consumes keyboard input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    Carousel,
    Form,
    Newsletter,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// One section's reveal latch plus the moment it fired.
struct SectionReveal {
    section: SectionId,
    trigger: VisibilityTrigger,
    fired_at: Option<Instant>,
}

impl SectionReveal {
    fn new(section: SectionId) -> Self {
        let trigger = match section.reveal_threshold() {
            Some(threshold) => VisibilityTrigger::at_ratio(threshold),
            None => VisibilityTrigger::on_mount(),
        };
        Self {
            section,
            trigger,
            fired_at: None,
        }
    }
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    theme_mode: ThemeMode,
    page: Page,
    nav: NavState,
    carousel: CarouselState,
    contact: ContactFormState,
    newsletter: NewsletterState,
    reveals: Vec<SectionReveal>,
    /// Next automatic carousel advance; `None` once autoplay is off.
    autoplay_deadline: Option<Instant>,
    /// Pending reversion of the contact success notice.
    notice_deadline: Option<Instant>,
    /// Pending reversion of the newsletter thanks notice.
    newsletter_deadline: Option<Instant>,
    mail_sender: Option<MailCommandSender>,
    /// Attempt id of the one in-flight send, if any. Outcomes carrying any
    /// other id are stale and ignored.
    in_flight: Option<Uuid>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Page,
            theme_mode: ThemeMode::default(),
            page: Page::new(24),
            nav: NavState::default(),
            carousel: CarouselState::default(),
            contact: ContactFormState::default(),
            newsletter: NewsletterState::default(),
            reveals: SectionId::ALL.into_iter().map(SectionReveal::new).collect(),
            autoplay_deadline: Some(Instant::now() + AUTOPLAY_INTERVAL),
            notice_deadline: None,
            newsletter_deadline: None,
            mail_sender: None,
            in_flight: None,
        }
    }

    pub fn set_mail_sender(&mut self, sender: MailCommandSender) {
        self.mail_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    pub fn newsletter(&self) -> &NewsletterState {
        &self.newsletter
    }

    /// Reveal snapshot for a section renderer.
    pub fn reveal(&self, section: SectionId, now: Instant) -> Reveal {
        self.reveals
            .iter()
            .find(|entry| entry.section == section)
            .and_then(|entry| entry.fired_at)
            .map(|fired_at| Reveal::new(true, now.saturating_duration_since(fired_at)))
            .unwrap_or_else(Reveal::hidden)
    }

    // ========================================================================
    // Viewport / scroll
    // ========================================================================

    pub fn on_resize(&mut self, body_height: u16, now: Instant) {
        self.page.resize(body_height);
        self.on_scroll_changed(now);
    }

    pub fn scroll_by(&mut self, delta: i32, now: Instant) {
        if self.page.scroll_by(delta) {
            self.on_scroll_changed(now);
        }
    }

    pub fn scroll_page(&mut self, direction: i32, now: Instant) {
        let step = i32::from(self.page.viewport().saturating_sub(2).max(1));
        self.scroll_by(direction * step, now);
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        if self.page.scroll_to_top() {
            self.on_scroll_changed(now);
        }
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) {
        self.scroll_by(i32::from(self.page.max_scroll()), now);
    }

    fn on_scroll_changed(&mut self, now: Instant) {
        let offset = self.page.scroll();
        dispatch_mvi!(self, nav, NavReducer, NavIntent::ScrollChanged { offset });
        self.observe_sections(now);
    }

    /// Feed each unfired trigger its current visible fraction.
    fn observe_sections(&mut self, now: Instant) {
        for entry in &mut self.reveals {
            if entry.fired_at.is_some() {
                continue;
            }
            let ratio = self.page.visible_fraction(entry.section);
            if entry.trigger.observe(ratio) {
                entry.fired_at = Some(now);
            }
        }
    }

    // ========================================================================
    // Navigation bar
    // ========================================================================

    pub fn toggle_menu(&mut self) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::ToggleMenu);
    }

    pub fn close_menu(&mut self) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::CloseMenu);
    }

    pub fn menu_up(&mut self) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::MenuUp);
    }

    pub fn menu_down(&mut self) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::MenuDown);
    }

    /// Activate the highlighted menu link.
    pub fn menu_activate(&mut self) {
        self.navigate_to(self.nav.menu_selection);
    }

    /// Activate a navigation link by its position in the link list.
    ///
    /// Closes the menu regardless of where the activation came from, then
    /// starts the smooth scroll toward the anchor.
    pub fn navigate_to(&mut self, link_index: usize) {
        let Some(link) = NAV_LINKS.get(link_index) else {
            return;
        };
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Activate);
        self.focus = Focus::Page;
        self.page.request_scroll_to(link.target);
    }

    /// Begin a smooth scroll toward a section, as if its anchor had been
    /// activated. Used for the `--start` flag.
    pub fn open_at(&mut self, section: SectionId) {
        self.page.request_scroll_to(section);
    }

    // ========================================================================
    // Focus
    // ========================================================================

    pub fn focus_page(&mut self) {
        self.focus = Focus::Page;
    }

    pub fn focus_carousel(&mut self) {
        self.focus = Focus::Carousel;
        self.page.request_scroll_to(SectionId::Testimonials);
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
        self.page.request_scroll_to(SectionId::Contact);
    }

    pub fn focus_newsletter(&mut self) {
        self.focus = Focus::Newsletter;
        self.page.request_scroll_to(SectionId::Footer);
    }

    // ========================================================================
    // Carousel (MVI pattern)
    // ========================================================================

    pub fn carousel_next(&mut self) {
        dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::Next);
        self.sync_autoplay_timer();
    }

    pub fn carousel_prev(&mut self) {
        dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::Prev);
        self.sync_autoplay_timer();
    }

    pub fn carousel_select(&mut self, index: usize) {
        if index >= self.carousel.len() {
            return;
        }
        dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::Select(index));
        self.sync_autoplay_timer();
    }

    /// Tear down the autoplay timer once autoplay is off. It is never
    /// re-armed.
    fn sync_autoplay_timer(&mut self) {
        if !self.carousel.autoplay() {
            self.autoplay_deadline = None;
        }
    }

    // ========================================================================
    // Contact form (MVI pattern)
    // ========================================================================

    pub fn contact_type(&mut self, ch: char) {
        dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Type(ch));
    }

    pub fn contact_backspace(&mut self) {
        dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Backspace);
    }

    pub fn contact_focus_next(&mut self) {
        dispatch_mvi!(self, contact, ContactReducer, ContactIntent::FocusNext);
    }

    pub fn contact_focus_prev(&mut self) {
        dispatch_mvi!(self, contact, ContactReducer, ContactIntent::FocusPrev);
    }

    /// Submit the form: transition to Pending and hand the composed payload
    /// to the mail worker. Refused while a send is already in flight.
    pub fn submit_contact(&mut self) {
        if !self.contact.can_submit() {
            return;
        }

        dispatch_mvi!(self, contact, ContactReducer, ContactIntent::Submit);

        let fields = &self.contact.fields;
        let payload = MailPayload {
            from_name: fields.name.trim().to_string(),
            from_email: fields.email.trim().to_string(),
            subject: fields.subject.trim().to_string(),
            message: fields.message.trim().to_string(),
        };
        let attempt_id = Uuid::new_v4();

        let accepted = match &self.mail_sender {
            Some(sender) => match sender.try_send(SendCommand {
                attempt_id,
                payload,
            }) {
                Ok(()) => true,
                Err(err) => {
                    tracing::error!(error = %err, "mail worker unavailable");
                    false
                }
            },
            None => {
                tracing::error!("no mail transport attached");
                false
            }
        };

        if accepted {
            self.in_flight = Some(attempt_id);
        } else {
            dispatch_mvi!(
                self,
                contact,
                ContactReducer,
                ContactIntent::SendFailed {
                    message: MailError::user_message().to_string(),
                }
            );
        }
    }

    pub fn on_mail_sent(&mut self, attempt_id: Uuid, now: Instant) {
        if self.in_flight != Some(attempt_id) {
            tracing::debug!(%attempt_id, "ignoring stale mail success");
            return;
        }
        self.in_flight = None;
        dispatch_mvi!(self, contact, ContactReducer, ContactIntent::SendSucceeded);
        self.notice_deadline = Some(now + SUCCESS_NOTICE_DURATION);
    }

    pub fn on_mail_failed(&mut self, attempt_id: Uuid) {
        if self.in_flight != Some(attempt_id) {
            tracing::debug!(%attempt_id, "ignoring stale mail failure");
            return;
        }
        self.in_flight = None;
        dispatch_mvi!(
            self,
            contact,
            ContactReducer,
            ContactIntent::SendFailed {
                message: MailError::user_message().to_string(),
            }
        );
    }

    // ========================================================================
    // Newsletter (MVI pattern)
    // ========================================================================

    pub fn newsletter_type(&mut self, ch: char) {
        dispatch_mvi!(self, newsletter, NewsletterReducer, NewsletterIntent::Type(ch));
    }

    pub fn newsletter_backspace(&mut self) {
        dispatch_mvi!(self, newsletter, NewsletterReducer, NewsletterIntent::Backspace);
    }

    pub fn newsletter_subscribe(&mut self, now: Instant) {
        dispatch_mvi!(self, newsletter, NewsletterReducer, NewsletterIntent::Subscribe);
        if self.newsletter.subscribed {
            self.newsletter_deadline = Some(now + NOTICE_DURATION);
        }
    }

    // ========================================================================
    // Timers
    // ========================================================================

    pub fn on_tick(&mut self, now: Instant) {
        if self.page.animate() {
            self.on_scroll_changed(now);
        } else {
            self.observe_sections(now);
        }

        if let Some(deadline) = self.autoplay_deadline {
            if now >= deadline {
                dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::AutoAdvance);
                self.autoplay_deadline = if self.carousel.autoplay() {
                    Some(now + AUTOPLAY_INTERVAL)
                } else {
                    None
                };
            }
        }

        if let Some(deadline) = self.notice_deadline {
            if now >= deadline {
                self.notice_deadline = None;
                dispatch_mvi!(self, contact, ContactReducer, ContactIntent::NoticeElapsed);
            }
        }

        if let Some(deadline) = self.newsletter_deadline {
            if now >= deadline {
                self.newsletter_deadline = None;
                dispatch_mvi!(
                    self,
                    newsletter,
                    NewsletterReducer,
                    NewsletterIntent::NoticeElapsed
                );
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
