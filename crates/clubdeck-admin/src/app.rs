//! The admin console application loop.
//!
//! One thread, event driven: crossterm input events feed the ui state
//! machines, and popup transitions scheduled by [`Popup`] are resolved
//! when their deadline passes, using the event-poll timeout as the timer.

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use unicode_width::UnicodeWidthChar;

use clubdeck_client::ApiClient;
use clubdeck_forms::i18n::{self, Lang, Msg};
use clubdeck_ui::dropdown::{Dropdown, DropdownId, DropdownRegistry};
use clubdeck_ui::message::{MessageBox, Tone};
use clubdeck_ui::popup::{ClickTarget, Effect, InitialFocus, LockMode, Pending, Popup};
use clubdeck_ui::scroll_lock::{Offset, ScrollLock, SharedScrollLock};
use clubdeck_ui::table_pager::{Row, TablePager, TableSpec};

use crate::fixtures::UserRecord;

// Frame geometry for mouse hit tests.
const ACCOUNT_ROW: u16 = 0;
const ACCOUNT_COL: (u16, u16) = (44, 58);
const MENU_ROWS: (u16, u16) = (1, 2);
const MENU_COLS: (u16, u16) = (44, 62);
const POPUP_ROWS: (u16, u16) = (5, 11);
const POPUP_COLS: (u16, u16) = (12, 56);

/// Which confirm button holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmFocus {
    Cancel,
    Delete,
}

/// The whole console state.
pub struct App {
    client: ApiClient,
    rt: tokio::runtime::Runtime,
    lang: Lang,
    users: Vec<UserRecord>,
    per_page: usize,
    pager: TablePager,
    search: String,
    dropdowns: DropdownRegistry,
    account: DropdownId,
    scroll_lock: SharedScrollLock,
    confirm: Popup,
    confirm_focus: ConfirmFocus,
    /// Scheduled popup transitions: (deadline, sequence tag).
    timers: Vec<(Instant, u64)>,
    /// Index into `users` of the row pending deletion.
    target: Option<usize>,
    /// Selection within the currently visible page.
    cursor: usize,
    /// Simulated page scroll, frozen while a popup holds the lock.
    scroll: u32,
    status: MessageBox,
    quit: bool,
}

impl App {
    /// Builds the console over the given user rows.
    #[must_use]
    pub fn new(
        client: ApiClient,
        rt: tokio::runtime::Runtime,
        users: Vec<UserRecord>,
        per_page: usize,
        lang: Lang,
    ) -> Self {
        let rows: Vec<Row> = users.iter().map(|u| Row::new(u.cells())).collect();
        let pager = TablePager::new(TableSpec::users(), rows).per_page(per_page);

        let mut dropdowns = DropdownRegistry::exclusive();
        let account = dropdowns.register(Dropdown::new(
            "user-dropdown-button",
            "user-dropdown-menu",
        ));

        let scroll_lock: SharedScrollLock = ScrollLock::shared();
        let confirm = Popup::new("delete-confirmation-popup", Arc::clone(&scroll_lock))
            .initial_focus(InitialFocus::CancelButton);

        Self {
            client,
            rt,
            lang,
            users,
            per_page,
            pager,
            search: String::new(),
            dropdowns,
            account,
            scroll_lock,
            confirm,
            confirm_focus: ConfirmFocus::Cancel,
            timers: Vec::new(),
            target: None,
            cursor: 0,
            scroll: 0,
            status: MessageBox::new(),
            quit: false,
        }
    }

    /// Runs the console until the user quits.
    pub fn run(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        let result = self.event_loop(out);
        execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        while !self.quit {
            self.draw(out)?;
            let timeout = self
                .next_deadline()
                .map_or(Duration::from_millis(250), |at| {
                    at.saturating_duration_since(Instant::now())
                });
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.on_key(key),
                    Event::Mouse(mouse) => self.on_mouse(mouse),
                    _ => {}
                }
            }
            self.flush_due(Instant::now());
        }
        Ok(())
    }

    // --- timers -----------------------------------------------------------

    fn schedule(&mut self, pending: Option<Pending>) {
        if let Some(p) = pending {
            self.timers.push((Instant::now() + p.delay, p.seq));
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|(at, _)| *at).min()
    }

    /// Resolves every transition whose deadline has passed.
    pub fn flush_due(&mut self, now: Instant) {
        let due: Vec<u64> = self
            .timers
            .iter()
            .filter(|(at, _)| *at <= now)
            .map(|(_, seq)| *seq)
            .collect();
        self.timers.retain(|(at, _)| *at > now);

        for seq in due {
            match self.confirm.finish(seq) {
                Some(Effect::Revealed { focus }) => {
                    if focus == InitialFocus::CancelButton {
                        self.confirm_focus = ConfirmFocus::Cancel;
                    }
                }
                Some(Effect::Hidden { restore }) => {
                    if let Some(offset) = restore {
                        self.scroll = offset.y;
                    }
                    self.target = None;
                }
                None => {}
            }
        }
    }

    // --- input ------------------------------------------------------------

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit = true,
                KeyCode::Char('u') => {
                    self.dropdowns.trigger_click(self.account);
                }
                _ => {}
            }
            return;
        }
        if self.confirm.is_visible() {
            self.on_confirm_key(key.code);
            return;
        }
        match key.code {
            KeyCode::Esc => {
                // Closes an open dropdown; focus goes back to its trigger.
                self.dropdowns.escape();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.apply_search();
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.apply_search();
            }
            KeyCode::Left => {
                self.pager.prev_page();
                self.cursor = 0;
            }
            KeyCode::Right => {
                self.pager.next_page();
                self.cursor = 0;
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                let visible = self.pager.page_view().visible.len();
                if self.cursor + 1 < visible {
                    self.cursor += 1;
                }
            }
            KeyCode::Delete => self.open_confirm(),
            _ => {}
        }
    }

    fn on_confirm_key(&mut self, code: KeyCode) {
        // A closing popup is still rendered but no longer interactive; keys
        // during the fade must not resurrect or confirm a cancelled delete.
        if !self.confirm.is_open() {
            return;
        }
        match code {
            KeyCode::Esc => {
                let pending = self.confirm.escape();
                self.schedule(pending);
            }
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                self.confirm_focus = match self.confirm_focus {
                    ConfirmFocus::Cancel => ConfirmFocus::Delete,
                    ConfirmFocus::Delete => ConfirmFocus::Cancel,
                };
            }
            KeyCode::Enter => match self.confirm_focus {
                ConfirmFocus::Cancel => {
                    let pending = self.confirm.close();
                    self.schedule(pending);
                }
                ConfirmFocus::Delete => self.perform_delete(),
            },
            KeyCode::Char('y') => self.perform_delete(),
            KeyCode::Char('n') => {
                let pending = self.confirm.close();
                self.schedule(pending);
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                if !self.scroll_lock.is_locked() {
                    self.scroll = self.scroll.saturating_sub(1);
                }
            }
            MouseEventKind::ScrollDown => {
                if !self.scroll_lock.is_locked() {
                    self.scroll = (self.scroll + 1).min(self.users.len() as u32);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn on_click(&mut self, col: u16, row: u16) {
        if self.confirm.is_visible() {
            if in_region(col, row, POPUP_COLS, POPUP_ROWS) {
                let pending = self.confirm.click(ClickTarget::Content);
                self.schedule(pending);
            } else {
                let pending = self.confirm.click(ClickTarget::Backdrop);
                self.schedule(pending);
            }
            return;
        }
        if row == ACCOUNT_ROW && (ACCOUNT_COL.0..ACCOUNT_COL.1).contains(&col) {
            self.dropdowns.trigger_click(self.account);
            return;
        }
        if self.dropdowns.get(self.account).is_some_and(|d| d.is_open())
            && in_region(col, row, MENU_COLS, (MENU_ROWS.0, MENU_ROWS.1 + 1))
        {
            // Menu items are not links here; the click is consumed.
            self.dropdowns.menu_click(self.account, false);
            self.dropdowns.close_all();
            self.status
                .show(Tone::Info, "Dashboard actions are not available here.");
            return;
        }
        self.dropdowns.document_click();
    }

    // --- actions ----------------------------------------------------------

    fn apply_search(&mut self) {
        self.pager.filter(&self.search);
        self.cursor = 0;
    }

    fn open_confirm(&mut self) {
        let view = self.pager.page_view();
        let Some(&row_idx) = view.visible.get(self.cursor) else {
            return;
        };
        self.target = Some(row_idx);
        self.dropdowns.close_all();
        let pending = self
            .confirm
            .open(Offset::new(0, self.scroll), LockMode::Acquire);
        self.schedule(pending);
    }

    fn perform_delete(&mut self) {
        let Some(row_idx) = self.target else {
            return;
        };
        let user = self.users[row_idx].clone();
        let result = self.rt.block_on(self.client.delete_user(user.user_id));
        match result {
            Ok(()) => {
                self.users.remove(row_idx);
                self.rebuild_pager();
                self.status
                    .show(Tone::Success, format!("Deleted {}", user.email));
            }
            Err(err) => {
                let text = if err.is_generic() {
                    i18n::text(self.lang, Msg::NetworkError).to_string()
                } else {
                    err.to_string()
                };
                self.status.show(Tone::Error, text);
            }
        }
        let pending = self.confirm.close();
        self.schedule(pending);
    }

    fn rebuild_pager(&mut self) {
        let rows: Vec<Row> = self.users.iter().map(|u| Row::new(u.cells())).collect();
        let term = self.search.clone();
        self.pager = TablePager::new(TableSpec::users(), rows).per_page(self.per_page);
        self.pager.filter(&term);
        self.cursor = 0;
    }

    // --- rendering --------------------------------------------------------

    /// Builds the current frame as plain lines.
    #[must_use]
    pub fn frame(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let mut header = format!("{:<44}", "clubdeck admin · users");
        header.push_str("[ Account v ]");
        lines.push(header);

        if self.dropdowns.get(self.account).is_some_and(|d| d.is_open()) {
            lines.push(format!("{:<44}  Update password", ""));
            lines.push(format!("{:<44}  Invite user", ""));
        }

        lines.push(format!("Search: {}", self.search));
        lines.push(String::new());

        let view = self.pager.page_view();
        for (pos, line) in self.pager.view().lines().enumerate() {
            let marker = if pos < view.visible.len() && pos == self.cursor && !view.no_results {
                "> "
            } else {
                "  "
            };
            lines.push(format!("{marker}{line}"));
        }

        if let Some(text) = self.status.text() {
            lines.push(String::new());
            lines.push(text.to_string());
        }
        lines.push(String::new());
        lines.push(
            "type to search · arrows page/select · Del delete · ^U account · ^C quit".to_string(),
        );

        // Simulated page scroll over the content.
        let mut lines: Vec<String> = lines.into_iter().skip(self.scroll as usize).collect();

        if self.confirm.is_visible() {
            self.overlay_confirm(&mut lines);
        }
        lines
    }

    fn overlay_confirm(&self, lines: &mut Vec<String>) {
        let email = self
            .target
            .and_then(|i| self.users.get(i))
            .map_or_else(String::new, |u| u.email.clone());
        let width = (POPUP_COLS.1 - POPUP_COLS.0) as usize;
        let inner = width - 2;
        let buttons = match self.confirm_focus {
            ConfirmFocus::Cancel => "   > Cancel <      [ Delete ]",
            ConfirmFocus::Delete => "   [ Cancel ]      > Delete <",
        };
        let box_lines = [
            format!("+{}+", "-".repeat(inner)),
            format!("|{:<inner$}|", " Delete user?"),
            format!("|{:<inner$}|", format!(" {email}")),
            format!("|{:<inner$}|", " This cannot be undone."),
            format!("|{:<inner$}|", buttons),
            format!("+{}+", "-".repeat(inner)),
        ];

        while lines.len() < POPUP_ROWS.1 as usize {
            lines.push(String::new());
        }
        for (i, box_line) in box_lines.iter().enumerate() {
            let row = POPUP_ROWS.0 as usize + i;
            let mut padded = clip_pad(&lines[row], POPUP_COLS.0 as usize);
            padded.push_str(box_line);
            lines[row] = padded;
        }
    }

    fn draw(&self, out: &mut impl Write) -> anyhow::Result<()> {
        queue!(out, Clear(ClearType::All))?;
        for (i, line) in self.frame().iter().enumerate() {
            queue!(out, MoveTo(0, i as u16), Print(line))?;
        }
        out.flush()?;
        Ok(())
    }

    // --- accessors used by tests ------------------------------------------

    /// Returns the pager (for assertions).
    #[must_use]
    pub fn pager(&self) -> &TablePager {
        &self.pager
    }

    /// Returns the delete confirmation popup state.
    #[must_use]
    pub fn confirm(&self) -> &Popup {
        &self.confirm
    }
}

fn in_region(col: u16, row: u16, cols: (u16, u16), rows: (u16, u16)) -> bool {
    (cols.0..cols.1).contains(&col) && (rows.0..rows.1).contains(&row)
}

/// Clips `text` to at most `width` display columns and pads with spaces up
/// to exactly `width`. Never splits inside a character.
fn clip_pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    for _ in used..width {
        out.push(' ');
    }
    out
}
