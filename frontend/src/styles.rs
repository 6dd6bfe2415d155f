pub const CONTAINER_LG: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/70 dark:bg-gray-800/70 backdrop-blur-md border-b border-amber-200/50 dark:border-gray-700/50";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-amber-600 dark:hover:text-amber-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-amber-600 dark:hover:text-amber-400 transition-colors duration-200";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-amber-600 dark:hover:text-amber-400 rounded-lg transition-colors duration-200";
pub const DROPDOWN: &str = "absolute right-0 bg-white dark:bg-gray-800 rounded-lg shadow-lg ring-1 ring-black ring-opacity-5 focus:outline-none";
pub const DROPDOWN_BUTTON: &str = "w-full px-2 py-3 text-sm text-center transition-colors duration-200 rounded-lg";

pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";

// Auth forms
pub const AUTH_CARD: &str = "rounded-xl shadow-xl p-8 max-w-md w-full mx-auto backdrop-blur-lg bg-white/80 dark:bg-gray-900/80 border border-gray-200/50 dark:border-gray-700/50";
pub const AUTH_HEADER: &str = "mb-6 text-center";
pub const AUTH_BUTTON: &str = "w-full py-3 px-4 text-sm font-semibold text-white bg-gradient-to-r from-amber-500 to-orange-600 hover:from-amber-600 hover:to-orange-700 rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-2 dark:focus:ring-offset-gray-900 disabled:opacity-60";
pub const FORM: &str = "mt-4 space-y-4";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-amber-500";

pub const TEXT_H1: &str = "text-4xl font-black text-transparent bg-clip-text bg-gradient-to-r from-amber-500 to-rose-500";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const LINK: &str = "text-amber-600 dark:text-amber-400 hover:text-amber-700 dark:hover:text-amber-300 transition-colors duration-200";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-amber-500 dark:text-amber-400";
