use crate::context::use_app;
use cyberedu::api::user;
use cyberedu::{DialogAction, UserAction};
use cyberedu_shared::LoginCredentials;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录弹窗
///
/// 由弹窗存储的 `login` 开关控制显示；请求拦截器收到"需要登录"时也会打开它。
#[component]
pub fn LoginDialog() -> impl IntoView {
    let app = use_app();
    let is_open = move || app.store.with(|s| s.dialog.login());

    let (account, set_account) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let close = move || {
        set_error_msg.set(None);
        set_password.set(String::new());
        app.dispatch(DialogAction::SetLogin(false));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if account.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("请输入学号和密码".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let credentials = LoginCredentials {
            password: password.get(),
            external_user_id: account.get(),
        };

        spawn_local(async move {
            let client = app.api();
            match user::login(&client, &credentials).await {
                Ok(patch) => {
                    app.dispatch(UserAction::Login(patch));
                    close();
                }
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show when=is_open>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg mb-4">"登录"</h3>
                    <form on:submit=on_submit class="flex flex-col gap-3">
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <input
                            type="text"
                            placeholder="学号"
                            class="input input-bordered"
                            on:input=move |ev| set_account.set(event_target_value(&ev))
                            prop:value=account
                        />
                        <input
                            type="password"
                            placeholder="密码"
                            class="input input-bordered"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                        />
                        <div class="modal-action">
                            <button type="button" class="btn btn-ghost" on:click=move |_| close()>
                                "取消"
                            </button>
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
