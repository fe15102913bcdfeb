//! Header component

use leptos::*;

use crate::ui::{BookMarkedIcon, Button, ButtonVariant, Input, SearchIcon};
use crate::{APP_NAME, SEARCH_PLACEHOLDER};

/// Sticky top bar with the brand, the search field and the auth buttons.
///
/// The search field is not wrapped in a form and has no handlers, so typing
/// or pressing enter does nothing.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <div class="flex items-center gap-2">
                    <BookMarkedIcon class="h-6 w-6 text-primary"/>
                    <span class="text-xl font-bold tracking-tight">{APP_NAME}</span>
                </div>
                <div class="mx-4 flex max-w-md flex-1 items-center">
                    <div class="relative w-full">
                        <SearchIcon class="absolute top-2.5 left-2.5 h-4 w-4 text-muted-foreground"/>
                        <Input
                            input_type="search"
                            placeholder=SEARCH_PLACEHOLDER
                            aria_label="Search audiobooks"
                            class="w-full bg-muted pl-8 md:w-full"
                        />
                    </div>
                </div>
                <div class="flex items-center gap-4">
                    <Button variant=ButtonVariant::Ghost class="hidden sm:inline-flex">
                        "Sign In"
                    </Button>
                    <Button>"Get Started"</Button>
                </div>
            </div>
        </header>
    }
}
