mod notifier_tests;
mod twilio_tests;
