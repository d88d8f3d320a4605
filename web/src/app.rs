use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::*;
use crate::shared::{Navigation, UserContextProvider};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <UserContextProvider>
                <div id="app">
                    <Navigation />
                    <main>
                        <Switch<Route> render={switch}/>
                    </main>
                </div>
            </UserContextProvider>
        </BrowserRouter>
    }
}
