//! article-web - Article customizer web app

fn main() {
    dioxus::launch(article_web::App);
}
