//! Six-cell one-time-code input.
//!
//! [`OtpCode`] is the cell logic; [`OtpInput`] renders it and moves browser focus
//! to whatever cell the logic asks for.

use dioxus::prelude::*;

pub const OTP_LEN: usize = 6;

/// What the view should do after a key or input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpEffect {
    None,
    Focus(usize),
    Submit,
}

/// The digits typed so far, one optional digit per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OtpCode {
    cells: [Option<char>; OTP_LEN],
}

impl OtpCode {
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The full code, only once every cell holds a digit.
    pub fn code(&self) -> Option<String> {
        self.is_complete()
            .then(|| self.cells.iter().flatten().collect())
    }

    /// Apply the new content of cell `index`.
    ///
    /// Non-digits are dropped. A cell keeps the last digit typed into it, and a
    /// digit in any cell but the last moves focus forward.
    pub fn input(&mut self, index: usize, raw: &str) -> OtpEffect {
        if index >= OTP_LEN {
            return OtpEffect::None;
        }
        let digit = raw.chars().filter(char::is_ascii_digit).last();
        self.cells[index] = digit;
        match digit {
            Some(_) if index + 1 < OTP_LEN => OtpEffect::Focus(index + 1),
            _ => OtpEffect::None,
        }
    }

    /// Backspace on an already empty cell steps back to the previous one.
    pub fn backspace(&self, index: usize) -> OtpEffect {
        if index > 0 && index < OTP_LEN && self.cells[index].is_none() {
            OtpEffect::Focus(index - 1)
        } else {
            OtpEffect::None
        }
    }

    /// Enter submits only a complete code.
    pub fn enter(&self) -> OtpEffect {
        if self.is_complete() {
            OtpEffect::Submit
        } else {
            OtpEffect::None
        }
    }

    /// Spread a pasted code over the cells from the start.
    pub fn paste(&mut self, raw: &str) -> OtpEffect {
        let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect();
        if digits.is_empty() {
            return OtpEffect::None;
        }
        self.cells = [None; OTP_LEN];
        for (cell, digit) in self.cells.iter_mut().zip(&digits) {
            *cell = Some(*digit);
        }
        OtpEffect::Focus(digits.len().min(OTP_LEN - 1))
    }
}

/// Hide most of an address: `s********@gmail.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{first}********@{domain}")
        }
        None => email.to_string(),
    }
}

/// Six single-digit inputs bound to `code`.
///
/// `on_submit` fires when Enter is pressed on a complete code.
#[component]
pub fn OtpInput(mut code: Signal<OtpCode>, disabled: bool, on_submit: EventHandler<()>) -> Element {
    let mut cells: Signal<Vec<Option<std::rc::Rc<MountedData>>>> =
        use_signal(|| vec![None; OTP_LEN]);

    let focus = move |index: usize| {
        if let Some(Some(cell)) = cells.peek().get(index).cloned() {
            spawn(async move {
                let _ = cell.set_focus(true).await;
            });
        }
    };

    let apply = move |effect: OtpEffect| match effect {
        OtpEffect::Focus(index) => focus(index),
        OtpEffect::Submit => on_submit.call(()),
        OtpEffect::None => {}
    };

    rsx! {
        div {
            class: "otp-cells",
            for index in 0..OTP_LEN {
                input {
                    key: "{index}",
                    class: "otp-cell",
                    r#type: "text",
                    inputmode: "numeric",
                    maxlength: "1",
                    autocomplete: "one-time-code",
                    disabled,
                    value: code().cell(index).map(String::from).unwrap_or_default(),
                    onmounted: move |evt| {
                        let data = evt.data();
                        if index == 0 {
                            let first = data.clone();
                            spawn(async move {
                                let _ = first.set_focus(true).await;
                            });
                        }
                        if let Some(slot) = cells.write().get_mut(index) {
                            *slot = Some(data);
                        }
                    },
                    oninput: move |evt| {
                        let raw = evt.value();
                        let effect = if raw.chars().filter(char::is_ascii_digit).count() > 1 {
                            code.write().paste(&raw)
                        } else {
                            code.write().input(index, &raw)
                        };
                        apply(effect);
                    },
                    onkeydown: move |evt| {
                        match evt.key() {
                            Key::Backspace => {
                                let effect = code.peek().backspace(index);
                                apply(effect);
                            }
                            Key::Enter => {
                                evt.prevent_default();
                                let effect = code.peek().enter();
                                apply(effect);
                            }
                            _ => {}
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(digits: &str) -> OtpCode {
        let mut code = OtpCode::default();
        for (i, d) in digits.chars().enumerate() {
            code.input(i, &d.to_string());
        }
        code
    }

    #[test]
    fn test_digit_advances_focus() {
        let mut code = OtpCode::default();
        for i in 0..OTP_LEN - 1 {
            assert_eq!(code.input(i, "7"), OtpEffect::Focus(i + 1));
        }
        assert_eq!(code.input(OTP_LEN - 1, "7"), OtpEffect::None);
        assert_eq!(code.code().as_deref(), Some("777777"));
    }

    #[test]
    fn test_non_digit_is_dropped() {
        let mut code = OtpCode::default();
        assert_eq!(code.input(0, "a"), OtpEffect::None);
        assert_eq!(code.cell(0), None);
        code.input(0, "4x");
        assert_eq!(code.cell(0), Some('4'));
    }

    #[test]
    fn test_backspace_on_empty_cell_retreats() {
        let code = typed("12");
        assert_eq!(code.backspace(2), OtpEffect::Focus(1));
        assert_eq!(code.backspace(1), OtpEffect::None);
        assert_eq!(code.backspace(0), OtpEffect::None);
    }

    #[test]
    fn test_enter_requires_six_digits() {
        let code = typed("12345");
        assert_eq!(code.enter(), OtpEffect::None);
        assert_eq!(code.code(), None);

        let code = typed("123456");
        assert_eq!(code.enter(), OtpEffect::Submit);
    }

    #[test]
    fn test_clearing_a_cell_makes_code_incomplete() {
        let mut code = typed("123456");
        code.input(3, "");
        assert!(!code.is_complete());
    }

    #[test]
    fn test_paste_fills_cells() {
        let mut code = OtpCode::default();
        assert_eq!(code.paste("12 34-56 99"), OtpEffect::Focus(5));
        assert_eq!(code.code().as_deref(), Some("123456"));

        let mut code = OtpCode::default();
        assert_eq!(code.paste("98"), OtpEffect::Focus(2));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("sara@gmail.com"), "s********@gmail.com");
        assert_eq!(mask_email("nobody"), "nobody");
    }
}
