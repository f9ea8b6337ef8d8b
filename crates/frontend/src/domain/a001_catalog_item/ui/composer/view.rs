use super::view_model::ItemComposerVm;
use crate::shared::components::FormField;
use crate::shared::icons::icon;
use crate::shared::url_state;
use contracts::domain::a001_catalog_item::DraftField;
use contracts::enums::item_category::ItemCategory;
use contracts::shared::config::TAG_VOCABULARY;
use contracts::usecases::u001_publish_item::SubmissionStatus;
use leptos::prelude::*;
use thaw::*;

/// Admin page for adding a catalog item
#[component]
pub fn ItemComposerPage() -> impl IntoView {
    let vm = ItemComposerVm::new();
    let submit_label = vm.submit_label();

    // Keep ?category= in sync with the switch
    Effect::new(move |_| {
        url_state::write_category_code(vm.category().code());
    });

    view! {
        <div class="composer-page">
            <Card>
                <div class="details-header">
                    <h3>"Add New Item"</h3>
                    <p class="details-header__hint">"Select category and fill in the details."</p>
                </div>

                <CategorySwitch vm=vm />

                <div class="details-form">
                    <DraftInput vm=vm field=DraftField::Title />
                    <DraftInput vm=vm field=DraftField::Price />

                    <Show when=move || vm.visibility().media>
                        <div class="info-box">
                            {icon("info")}
                            " Note: At least one Image Link is mandatory."
                        </div>
                    </Show>
                    <DraftInput vm=vm field=DraftField::Image />
                    <div class="details-grid--2col">
                        <DraftInput vm=vm field=DraftField::Image2 />
                        <DraftInput vm=vm field=DraftField::Image3 />
                    </div>

                    <DraftInput vm=vm field=DraftField::Description rows=4 />

                    <Show when=move || vm.visibility().media>
                        <div class="details-grid--2col">
                            <DraftInput vm=vm field=DraftField::VideoLink />
                            <DraftInput vm=vm field=DraftField::InstaReel />
                        </div>
                    </Show>

                    <Show when=move || vm.visibility().tags>
                        <TagPicker vm=vm />
                    </Show>

                    <Show when=move || vm.visibility().workshop>
                        <WorkshopFields vm=vm />
                    </Show>
                </div>

                <StatusLine vm=vm />

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.submit()
                        disabled=vm.is_submit_disabled()
                    >
                        {icon("send")}
                        " "
                        {move || submit_label.get()}
                    </Button>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn CategorySwitch(vm: ItemComposerVm) -> impl IntoView {
    view! {
        <div class="category-switch">
            {ItemCategory::all()
                .into_iter()
                .map(|category| {
                    view! {
                        <Button
                            appearance=move || {
                                if vm.category() == category {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            }
                            on_click=move |_| vm.select_category(category)
                        >
                            {category.display_name()}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One draft field bound to the ViewModel
#[component]
fn DraftInput(
    vm: ItemComposerVm,
    field: DraftField,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let on_input = Callback::new(move |value: String| vm.set_field(field, value));

    view! {
        <FormField
            label=field.label()
            value=vm.field(field)
            on_input=on_input
            placeholder=field.placeholder()
            required=field.is_required()
            rows=rows
        />
    }
}

#[component]
fn TagPicker(vm: ItemComposerVm) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Select Tags"</label>
            <div class="tag-picker">
                {TAG_VOCABULARY
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=move || {
                                    if vm.has_tag(tag) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                }
                                on_click=move |_| vm.toggle_tag(tag)
                            >
                                {tag}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn WorkshopFields(vm: ItemComposerVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <div class="details-grid--2col">
                <DraftInput vm=vm field=DraftField::Date />
                <DraftInput vm=vm field=DraftField::Time />
            </div>
            <DraftInput vm=vm field=DraftField::LocationName />
            <DraftInput vm=vm field=DraftField::LocationAddress />
            <div class="details-grid--2col">
                <DraftInput vm=vm field=DraftField::MapEmbedUrl />
                <DraftInput vm=vm field=DraftField::MapLink />
            </div>
            <DraftInput vm=vm field=DraftField::Features />
        </div>
    }
}

#[component]
fn StatusLine(vm: ItemComposerVm) -> impl IntoView {
    move || match vm.status() {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Success(message) => Some(
            view! {
                <MessageBar intent=MessageBarIntent::Success>
                    {icon("check-circle")}
                    " "
                    {message}
                </MessageBar>
            }
            .into_any(),
        ),
        SubmissionStatus::Error(message) => Some(
            view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {icon("alert-circle")}
                    " "
                    {message}
                </MessageBar>
            }
            .into_any(),
        ),
    }
}
