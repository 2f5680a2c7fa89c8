// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A single screen: language selector, load trigger, product table,
//! status/message line, and the add-product inputs. Every caption comes
//! from the current locale bundle, so a language switch re-labels the
//! whole surface.

use super::{App, Message, Notice, ProductView};
use crate::domain::{Language, Product};
use crate::i18n::LabelKey;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, text_input, Button, Column, Container, Row, Text},
    Element, Length,
};

const ID_COLUMN_WIDTH: f32 = 56.0;

pub fn view(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n.label(LabelKey::WindowTitle)).size(24);

    let language_row = Row::new()
        .push(Text::new(app.i18n.label(LabelKey::SelectLanguage)))
        .push(iced::widget::pick_list(
            Language::ALL,
            Some(app.language()),
            Message::LanguageSelected,
        ))
        .push(
            Button::new(Text::new(app.i18n.label(LabelKey::LoadProducts)))
                .on_press_maybe((!app.is_loading()).then_some(Message::LoadProducts)),
        )
        .spacing(10);

    let content = Column::new()
        .push(title)
        .push(language_row)
        .push(product_table(app))
        .push(Text::new(status_line(app)).size(14))
        .push(add_form(app))
        .spacing(16)
        .padding(16)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The tabular id/name/description display. The header is always shown;
/// rows appear only in the `Loaded` state.
fn product_table(app: &App) -> Element<'_, Message> {
    let header = Row::new()
        .push(
            Text::new(app.i18n.label(LabelKey::ColumnId)).width(Length::Fixed(ID_COLUMN_WIDTH)),
        )
        .push(Text::new(app.i18n.label(LabelKey::ColumnName)).width(Length::FillPortion(2)))
        .push(
            Text::new(app.i18n.label(LabelKey::ColumnDescription)).width(Length::FillPortion(3)),
        )
        .spacing(8);

    let mut rows = Column::new().spacing(4);
    if let ProductView::Loaded(products) = app.products() {
        for product in products {
            rows = rows.push(product_row(product));
        }
    }

    Column::new()
        .push(header)
        .push(scrollable(rows).height(Length::Fill))
        .spacing(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn product_row(product: &Product) -> Element<'_, Message> {
    Row::new()
        .push(Text::new(product.id.to_string()).width(Length::Fixed(ID_COLUMN_WIDTH)))
        .push(Text::new(&product.name).width(Length::FillPortion(2)))
        .push(Text::new(&product.description).width(Length::FillPortion(3)))
        .spacing(8)
        .into()
}

/// Name/description inputs plus the add trigger. The inputs stay editable
/// while a task runs; only the trigger is disabled.
fn add_form(app: &App) -> Element<'_, Message> {
    let name_input = text_input(
        &app.i18n.label(LabelKey::NamePlaceholder),
        app.name_input(),
    )
    .on_input(Message::NameInputChanged);

    let description_input = text_input(
        &app.i18n.label(LabelKey::DescriptionPlaceholder),
        app.description_input(),
    )
    .on_input(Message::DescriptionInputChanged);

    Row::new()
        .push(name_input)
        .push(description_input)
        .push(
            Button::new(Text::new(app.i18n.label(LabelKey::AddProduct)))
                .on_press_maybe((!app.is_loading()).then_some(Message::AddProduct)),
        )
        .spacing(10)
        .into()
}

/// Resolves the status line: transient notices first, then the message
/// implied by the product view state.
fn status_line(app: &App) -> String {
    if let Some(notice) = app.notice() {
        return match notice {
            Notice::ProductAdded => app.i18n.label(LabelKey::ProductAdded),
            Notice::FieldsRequired => app.i18n.label(LabelKey::FieldsRequired),
            Notice::AddFailed(e) => app.i18n.tr(e.i18n_key()),
        };
    }

    match app.products() {
        ProductView::Idle => app.i18n.label(LabelKey::InstructionMessage),
        ProductView::Empty => app.i18n.label(LabelKey::NoContent),
        ProductView::Error(e) => app.i18n.tr(e.i18n_key()),
        ProductView::Loaded(_) => String::new(),
    }
}
