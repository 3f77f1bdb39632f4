use common::{EDUCATION_LEVELS, ProfileField, ProfileSubmission};
use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileFormProps {
    pub on_submit: Callback<ProfileSubmission>,
}

#[function_component(ProfileForm)]
pub fn profile_form(props: &ProfileFormProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Profile form element is not mounted");
                return;
            };

            match capture(&form) {
                Ok(profile) => {
                    log::info!("Profile submitted with {} fields", profile.len());
                    on_submit.emit(profile);
                }
                Err(err) => log::error!("Failed to read profile form: {:?}", err),
            }
        })
    };

    html! {
        <form id="profile-form" ref={form_ref} onsubmit={on_submit} class="card bg-base-100 shadow">
            <div class="card-body space-y-2">
                <h2 class="card-title">{"Your Profile"}</h2>
                { for ProfileField::ALL.iter().map(render_field) }
                <div class="card-actions justify-end mt-4">
                    <button type="submit" class="btn btn-primary">{"Find Scholarships"}</button>
                </div>
            </div>
        </form>
    }
}

/// Reads every named string field of the form; values stay uninterpreted.
fn capture(form: &HtmlFormElement) -> Result<ProfileSubmission, JsValue> {
    let form_data = FormData::new_with_form(form)?;
    let mut profile = ProfileSubmission::new();

    let Some(entries) = js_sys::try_iter(&form_data)? else {
        return Ok(profile);
    };

    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        let Some(key) = pair.get(0).as_string() else {
            continue;
        };
        match pair.get(1).as_string() {
            Some(value) => profile.insert(key, value),
            None => log::warn!("Skipping non-text form field: {}", key),
        }
    }

    Ok(profile)
}

fn render_field(field: &ProfileField) -> Html {
    let input = match field {
        ProfileField::EducationLevel => html! {
            <select name={field.key()} class="select select-bordered w-full" required={true}>
                <option value="" disabled={true} selected={true}>{"Select a level"}</option>
                { for EDUCATION_LEVELS.iter().map(|level| html! { <option value={*level}>{*level}</option> }) }
            </select>
        },
        ProfileField::Gpa => html! {
            <input type="number" name={field.key()} class="input input-bordered w-full"
                min="0" max="4" step="0.01" placeholder="3.5" required={true} />
        },
        ProfileField::Age | ProfileField::Income => html! {
            <input type="number" name={field.key()} class="input input-bordered w-full"
                min="0" required={true} />
        },
        ProfileField::Name | ProfileField::Country | ProfileField::FieldOfStudy => html! {
            <input type="text" name={field.key()} class="input input-bordered w-full" required={true} />
        },
    };

    html! {
        <div class="form-control" key={field.key()}>
            <label class="label"><span class="label-text">{field.label()}</span></label>
            {input}
        </div>
    }
}
