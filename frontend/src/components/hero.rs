//! Hero section component

use leptos::*;

use crate::ui::{Button, ButtonSize, PlayCircleIcon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" aria-labelledby="hero-title" class="mb-12 space-y-4 text-center">
            <h1 id="hero-title" class="text-4xl font-extrabold tracking-tight lg:text-5xl">
                "Sách nói dành cho tâm hồn"
            </h1>
            <p class="mx-auto max-w-[700px] text-lg text-muted-foreground">
                "Khám phá hàng ngàn cuốn sách nói chất lượng cao từ những tác giả nổi tiếng nhất thế giới. "
                "Nghe mọi lúc, mọi nơi."
            </p>
            <div class="pt-4">
                <Button
                    size=ButtonSize::Lg
                    class="rounded-full shadow-lg transition-transform hover:scale-105"
                >
                    <PlayCircleIcon class="mr-2 h-5 w-5"/>
                    "Nghe thử ngay"
                </Button>
            </div>
        </section>
    }
}
