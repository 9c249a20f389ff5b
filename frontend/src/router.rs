use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

/// Detail pages take their identifier from the query string
/// (`/blog-details?id=…`), so no route carries a path parameter.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog-details")]
    BlogDetail,
    #[at("/stories")]
    Stories,
    #[at("/story-details")]
    StoryDetail,
    #[at("/submit-blog")]
    SubmitBlog,
    #[at("/share-story")]
    ShareStory,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Blog => html! { <pages::blog::BlogPage /> },
        Route::BlogDetail => html! { <pages::blog_detail::BlogDetailPage /> },
        Route::Stories => html! { <pages::stories::StoriesPage /> },
        Route::StoryDetail => html! { <pages::story_detail::StoryDetailPage /> },
        Route::SubmitBlog => html! { <pages::submit_blog::SubmitBlogPage /> },
        Route::ShareStory => html! { <pages::share_story::ShareStoryPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-gray-50" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
