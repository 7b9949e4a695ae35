mod step_down_case;
