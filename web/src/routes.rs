use yew::prelude::*;
use yew_router::prelude::*;

use replies::{PictureId, UserId};

use crate::pages::*;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/user/login")]
    Login,
    #[at("/admin/userManage")]
    UserManage,
    #[at("/user/center/:id")]
    UserCenter { id: UserId },
    #[at("/user/edit/:id")]
    UserEdit { id: UserId },
    #[at("/admin/user/edit/:id")]
    AdminUserEdit { id: UserId },
    #[at("/picture/:id")]
    PictureDetail { id: PictureId },
    #[at("/picture/edit/:id")]
    PictureEdit { id: PictureId },
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(selected_route: Route) -> Html {
    match selected_route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::UserManage => html! { <UserManage /> },
        Route::UserCenter { id } => html! { <UserCenter {id} /> },
        Route::UserEdit { id } => html! { <UserEdit {id} admin={false} /> },
        Route::AdminUserEdit { id } => html! { <UserEdit {id} admin={true} /> },
        Route::PictureDetail { id } => html! { <PictureDetail {id} /> },
        Route::PictureEdit { id } => html! { <PictureEdit {id} /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn it_should_build_paths_with_ids() {
        assert_eq!(Route::UserCenter { id: 3 }.to_path(), "/user/center/3");
        assert_eq!(Route::AdminUserEdit { id: 4 }.to_path(), "/admin/user/edit/4");
        assert_eq!(Route::PictureDetail { id: 5 }.to_path(), "/picture/5");
        assert_eq!(Route::PictureEdit { id: 5 }.to_path(), "/picture/edit/5");
    }

    #[test]
    pub fn it_should_keep_admin_pages_under_admin() {
        assert_eq!(Route::UserManage.to_path(), "/admin/userManage");
        assert_eq!(Route::Home.to_path(), "/");
    }
}
