use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use replies::UserQueryRequest;

use crate::errors::into_data;
use crate::hooks::use_services;
use crate::routes::Route;
use crate::shared::{ListErrors, RequireUser};

#[function_component(UserManage)]
pub fn user_manage() -> Html {
    html! {
        <RequireUser admin={true}>
            <UserTable />
        </RequireUser>
    }
}

#[function_component(UserTable)]
fn user_table() -> Html {
    let services = use_services();
    let current = use_state(|| 1u64);
    let users = {
        let client = services.client.clone();
        let query = UserQueryRequest {
            current: *current,
            ..Default::default()
        };
        use_async(async move { into_data(client.list_users(&query).await?) })
    };

    {
        let users = users.clone();
        use_effect_with_deps(
            move |_| {
                users.run();
                || ()
            },
            *current,
        );
    }

    let pages = users.data.as_ref().map(|p| p.pages()).unwrap_or_default();

    let previous = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set((*current).saturating_sub(1).max(1)))
    };
    let next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(*current + 1))
    };

    html! {
        <div class="user-manage-page">
            <h1>{ "Users" }</h1>
            <ListErrors error={users.error.clone()} />
            <table class="users">
                <thead>
                    <tr>
                        <th>{ "Id" }</th>
                        <th>{ "Account" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Role" }</th>
                        <th>{ "Created" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for users.data.iter().flat_map(|p| p.records.iter()).map(|u| html! {
                        <tr key={u.id}>
                            <td>{ u.id }</td>
                            <td>{ u.user_account.clone().unwrap_or_default() }</td>
                            <td>
                                <Link<Route> to={Route::UserCenter { id: u.id }}>
                                    { u.user_name.clone().unwrap_or_default() }
                                </Link<Route>>
                            </td>
                            <td>{ if u.user_role.is_admin() { "admin" } else { "user" } }</td>
                            <td>{ u.create_time.clone().unwrap_or_default() }</td>
                            <td>
                                <Link<Route> to={Route::AdminUserEdit { id: u.id }}>{ "Edit" }</Link<Route>>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
            <div class="pagination">
                <button class="btn" onclick={previous} disabled={*current <= 1}>{ "Previous" }</button>
                <span>{ format!("{} / {}", *current, pages) }</span>
                <button class="btn" onclick={next} disabled={*current >= pages}>{ "Next" }</button>
            </div>
        </div>
    }
}
