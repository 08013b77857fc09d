//! Gift Mission Screen
//!
//! The screen the simulator was built for: a back button, a fieldset of gift
//! radios and a submit button, all reachable only through speech navigation.
//! Submission itself is reported to the caller, never performed here.

use echonav_dom::{Activation, Document, DomResult, NodeId};

use crate::dom_host::DomHost;

/// Gifts offered when no list is supplied
pub const DEFAULT_GIFTS: [&str; 3] = ["커피 쿠폰", "영화 예매권", "도서 상품권"];

/// Spoken once when the screen opens
pub const START_HINT: &str =
    "미션 화면입니다. 좌우로 탐색하여 선물을 선택하고, 선물 보내기 버튼을 활성화하세요.";
pub const START_HINT_MS: u64 = 4000;

/// Spoken when the submit button is pressed without a selection
pub const SELECT_FIRST: &str = "선물을 먼저 선택해주세요.";

/// Something the user did on the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionEvent {
    GoBack,
    GiftSelected(String),
    /// Submit pressed; `None` when no gift is selected yet
    Submit(Option<String>),
}

#[derive(Debug)]
pub struct MissionScreen {
    host: DomHost,
    container: NodeId,
    back: NodeId,
    submit: NodeId,
    selected: Option<String>,
}

impl MissionScreen {
    pub fn new(gifts: &[&str]) -> DomResult<Self> {
        let mut doc = Document::new("app://mission");
        let body = doc.body();

        let container = doc.append_element(body, "div", &[("id", "mission")])?;
        let form = doc.append_element(container, "form", &[])?;

        let back = doc.append_element(form, "button", &[("type", "button"), ("aria-label", "뒤로가기")])?;
        doc.append_text(back, "뒤로가기")?;

        let fieldset = doc.append_element(form, "fieldset", &[])?;
        let legend = doc.append_element(fieldset, "legend", &[])?;
        doc.append_text(legend, "선물 목록")?;

        for (i, gift) in gifts.iter().enumerate() {
            let id = format!("gift-{}", i);
            let row = doc.append_element(fieldset, "div", &[])?;
            doc.append_element(row, "input", &[("type", "radio"), ("id", id.as_str()), ("name", "gift"), ("value", *gift)])?;
            let label = doc.append_element(row, "label", &[("for", id.as_str())])?;
            doc.append_text(label, gift)?;
        }

        let submit = doc.append_element(form, "button", &[("type", "submit")])?;
        doc.append_text(submit, "선물 보내기")?;

        doc.append_element(container, "div", &[("aria-live", "assertive")])?;

        Ok(Self {
            host: DomHost::new(doc),
            container,
            back,
            submit,
            selected: None,
        })
    }

    pub fn host(&self) -> &DomHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut DomHost {
        &mut self.host
    }

    /// Root the simulator scans
    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn selected_gift(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Turn the DOM activations since the last call into screen events
    pub fn poll(&mut self) -> Vec<MissionEvent> {
        let activations = self.host.take_activations();
        let mut events = Vec::with_capacity(activations.len());

        for activation in activations {
            match activation {
                Activation::RadioChecked { node, .. } => {
                    let value = self.host.document()
                        .element(node)
                        .and_then(|e| e.get_attr("value"))
                        .map(str::to_string);
                    if let Some(gift) = value {
                        self.selected = Some(gift.clone());
                        events.push(MissionEvent::GiftSelected(gift));
                    }
                }
                Activation::ButtonPressed { node } if node == self.back => {
                    events.push(MissionEvent::GoBack);
                }
                Activation::ButtonPressed { node } if node == self.submit => {
                    events.push(MissionEvent::Submit(self.selected.clone()));
                }
                other => tracing::debug!("Unhandled activation {:?}", other),
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_structure() {
        let screen = MissionScreen::new(&DEFAULT_GIFTS).unwrap();
        let doc = screen.host().document();
        let radios = doc.query_selector_all(screen.container(), "input[type=radio][name=gift]").unwrap();
        assert_eq!(radios.len(), 3);
        assert_eq!(doc.get_element_by_id("gift-1"), Some(radios[1]));
        let label = doc.label_for("gift-2").unwrap();
        assert_eq!(doc.tree().text_content(label), "도서 상품권");
    }

    #[test]
    fn test_poll_reports_selection_and_submit() {
        let mut screen = MissionScreen::new(&DEFAULT_GIFTS).unwrap();
        let submit = screen.submit;
        screen.host_mut().document_mut().click(submit);
        assert_eq!(screen.poll(), vec![MissionEvent::Submit(None)]);

        let radio = screen.host().document().get_element_by_id("gift-0").unwrap();
        screen.host_mut().document_mut().click(radio);
        screen.host_mut().document_mut().click(submit);
        assert_eq!(screen.poll(), vec![
            MissionEvent::GiftSelected("커피 쿠폰".into()),
            MissionEvent::Submit(Some("커피 쿠폰".into())),
        ]);
        assert_eq!(screen.selected_gift(), Some("커피 쿠폰"));
    }
}
