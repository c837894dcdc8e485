// End-to-end tests for the Polyglot TTS HTTP API
//
// Each test boots the full router on an ephemeral port with in-process fake
// translation and speech providers, so no test reaches the network. The fakes
// record every call, which lets tests assert what the providers were (or were
// not) asked to do.

mod helpers;
mod test_languages;
